//! Staggered reveal hook shared by all three sections.

use dioxus::prelude::*;
use portfolio_core::{RevealGate, TransitionTable, Trigger, VisualState};

use crate::context::use_visibility;

/// Visual states of one section's items, driven by a transition table
#[derive(Clone, Copy, PartialEq)]
pub struct RevealList {
    states: Signal<Vec<VisualState>>,
    table: TransitionTable,
}

impl RevealList {
    pub fn state(&self, index: usize) -> VisualState {
        self.states
            .read()
            .get(index)
            .copied()
            .unwrap_or_default()
    }

    /// Feed one trigger to one item
    pub fn apply(&mut self, index: usize, trigger: Trigger) {
        let table = self.table;
        if let Some(state) = self.states.write().get_mut(index) {
            *state = table.next(*state, trigger);
        }
    }

    /// Feed one trigger to every item
    pub fn apply_all(&mut self, trigger: Trigger) {
        let table = self.table;
        for state in self.states.write().iter_mut() {
            *state = table.next(*state, trigger);
        }
    }
}

/// Reveals `count` items of the section `section_id` once per mount.
///
/// Tables revealed by [`Trigger::Mounted`] fire right after the first render;
/// tables revealed by [`Trigger::BecameVisible`] wait on the injected
/// visibility observer.
pub fn use_staggered_reveal(
    section_id: &'static str,
    table: TransitionTable,
    count: usize,
) -> RevealList {
    let observer = use_visibility();
    let mut gate = use_signal(RevealGate::new);
    let states = use_signal(|| vec![VisualState::Hidden; count]);
    let list = RevealList { states, table };

    use_effect(move || {
        let mut list = list;
        let trigger = table.reveal_trigger().unwrap_or(Trigger::Mounted);
        let mut fire = move || {
            if gate.write().fire() {
                tracing::debug!(section_id, table = table.name, "revealing section");
                list.apply_all(trigger);
            }
        };
        match trigger {
            Trigger::BecameVisible => observer.on_became_visible(section_id, Box::new(fire)),
            _ => fire(),
        }
    });

    list
}
