//! Contact form field.
//!
//! Renders one [`ContactField`] as a labelled input or textarea. Values are
//! controlled: the parent owns the text and receives every keystroke.

use dioxus::prelude::*;
use portfolio_core::{ContactField, FieldKind};

/// Properties for the FormField component
#[derive(Clone, PartialEq, Props)]
pub struct FormFieldProps {
    /// Descriptor and current value
    pub field: ContactField,
    /// Handler called with the new value on every keystroke
    pub oninput: EventHandler<String>,
    /// Index for staggered animation
    #[props(default = 0)]
    pub index: usize,
}

/// Labelled, controlled form field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for field in form.read().fields() {
///         FormField {
///             field: field.clone(),
///             oninput: move |value| form.write().set_field(field.id, value),
///         }
///     }
/// }
/// ```
#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    let field = &props.field;
    let oninput = props.oninput;
    let kind_class = field_class(field.kind);
    let id = format!("contact-{}", field.label.to_ascii_lowercase());

    let control = match field.kind.input_type() {
        Some(input_type) => rsx! {
            input {
                id: "{id}",
                class: "input-field",
                r#type: input_type,
                value: "{field.value}",
                placeholder: field.placeholder,
                oninput: move |e| oninput.call(e.value()),
            }
        },
        None => rsx! {
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "5",
                placeholder: field.placeholder,
                value: "{field.value}",
                oninput: move |e| oninput.call(e.value()),
            }
        },
    };

    rsx! {
        div {
            class: "form-field {kind_class}",
            style: "--index: {props.index}",
            label {
                class: "input-label",
                r#for: "{id}",
                "{field.label}"
            }
            {control}
        }
    }
}

/// CSS modifier for a field kind
pub fn field_class(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Multiline => "form-field--multiline",
        FieldKind::Text | FieldKind::Email => "form-field--single",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_classes() {
        assert_eq!(field_class(FieldKind::Multiline), "form-field--multiline");
        assert_eq!(field_class(FieldKind::Email), "form-field--single");
    }
}
