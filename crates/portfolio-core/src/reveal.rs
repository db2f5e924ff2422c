//! Staggered reveal: visual states, transition tables and delay schedules.
//!
//! Every card-like element in the sections is in one [`VisualState`] and moves
//! between states through an explicit [`TransitionTable`]. Timing lives in a
//! [`StaggerSchedule`], which only says *when* each sibling starts; the
//! transition curves themselves are left to the stylesheet.
//!
//! ```
//! use portfolio_core::reveal::{Trigger, VisualState, CREDENTIAL_CARD};
//!
//! let state = CREDENTIAL_CARD.next(VisualState::Hidden, Trigger::BecameVisible);
//! assert_eq!(state, VisualState::Visible);
//! ```

use std::time::Duration;

/// Presentation state of a single revealed element
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum VisualState {
    /// Not yet revealed
    #[default]
    Hidden,
    /// Revealed and at rest
    Visible,
    /// Revealed and under the pointer
    Hovered,
}

impl VisualState {
    /// CSS class for this state
    pub fn class(&self) -> &'static str {
        match self {
            VisualState::Hidden => "is-hidden",
            VisualState::Visible => "is-visible",
            VisualState::Hovered => "is-visible is-hovered",
        }
    }

    pub fn is_revealed(&self) -> bool {
        !matches!(self, VisualState::Hidden)
    }
}

/// Events that can move an element between visual states
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Trigger {
    /// The owning component mounted
    Mounted,
    /// The owning section scrolled into the viewport
    BecameVisible,
    PointerEnter,
    PointerLeave,
}

/// One row of a transition table
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    pub from: VisualState,
    pub trigger: Trigger,
    pub to: VisualState,
}

const fn t(from: VisualState, trigger: Trigger, to: VisualState) -> Transition {
    Transition { from, trigger, to }
}

/// State -> trigger -> state table. Pairs not listed leave the state unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TransitionTable {
    pub name: &'static str,
    pub transitions: &'static [Transition],
}

impl TransitionTable {
    pub fn next(&self, state: VisualState, trigger: Trigger) -> VisualState {
        self.transitions
            .iter()
            .find(|row| row.from == state && row.trigger == trigger)
            .map(|row| row.to)
            .unwrap_or(state)
    }

    /// The trigger that takes an element out of `Hidden`
    pub fn reveal_trigger(&self) -> Option<Trigger> {
        self.transitions
            .iter()
            .find(|row| row.from == VisualState::Hidden && row.to == VisualState::Visible)
            .map(|row| row.trigger)
    }
}

const HOVER_ROWS: [Transition; 2] = [
    t(VisualState::Visible, Trigger::PointerEnter, VisualState::Hovered),
    t(VisualState::Hovered, Trigger::PointerLeave, VisualState::Visible),
];

/// Contact rows reveal as soon as the panel mounts
pub const CONTACT_ROW: TransitionTable = TransitionTable {
    name: "contact-row",
    transitions: &[
        t(VisualState::Hidden, Trigger::Mounted, VisualState::Visible),
        HOVER_ROWS[0],
        HOVER_ROWS[1],
    ],
};

/// Credential cards wait for the section to scroll into view
pub const CREDENTIAL_CARD: TransitionTable = TransitionTable {
    name: "credential-card",
    transitions: &[
        t(VisualState::Hidden, Trigger::BecameVisible, VisualState::Visible),
        HOVER_ROWS[0],
        HOVER_ROWS[1],
    ],
};

/// Project cards wait for visibility; `Hovered` also reveals the card's links
pub const PROJECT_CARD: TransitionTable = TransitionTable {
    name: "project-card",
    transitions: &[
        t(VisualState::Hidden, Trigger::BecameVisible, VisualState::Visible),
        HOVER_ROWS[0],
        HOVER_ROWS[1],
    ],
};

/// Per-index entrance delays for a list of siblings
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StaggerSchedule {
    /// Delay before the first child starts
    pub initial_delay: Duration,
    /// Extra delay added for every following child
    pub step: Duration,
}

impl StaggerSchedule {
    pub const fn new(initial_delay: Duration, step: Duration) -> Self {
        Self {
            initial_delay,
            step,
        }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.initial_delay
            .saturating_add(self.step.saturating_mul(index))
    }

    /// Delay formatted for a CSS `transition-delay` / custom property
    pub fn css_delay(&self, index: usize) -> String {
        format!("{}ms", self.delay_for(index).as_millis())
    }
}

pub const CONTACT_STAGGER: StaggerSchedule =
    StaggerSchedule::new(Duration::from_millis(300), Duration::from_millis(200));
pub const EDUCATION_STAGGER: StaggerSchedule =
    StaggerSchedule::new(Duration::ZERO, Duration::from_millis(300));
pub const PROJECT_STAGGER: StaggerSchedule =
    StaggerSchedule::new(Duration::from_millis(300), Duration::from_millis(200));

/// Once-only latch for the reveal trigger.
///
/// The first `fire` opens the gate; any later visibility change is ignored
/// for the rest of the mount.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevealGate {
    fired: bool,
}

impl RevealGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only on the first call
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.fired
    }
}

/// Injected capability that reports when an element enters the viewport.
///
/// Implementations call `callback` at most once per registration.
pub trait VisibilityObserver {
    fn on_became_visible(&self, target_id: &str, callback: Box<dyn FnOnce() + 'static>);
}

/// Observer that treats every target as already visible
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateVisibility;

impl VisibilityObserver for ImmediateVisibility {
    fn on_became_visible(&self, target_id: &str, callback: Box<dyn FnOnce() + 'static>) {
        tracing::debug!(target_id, "visibility gating disabled, revealing immediately");
        callback();
    }
}
