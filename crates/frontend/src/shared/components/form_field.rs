//! Descriptor-driven form field: label, widget and error region.
//!
//! The widget is chosen by matching on [`FieldKind`]; adding a kind is a
//! compile error here until it is handled. The error region is absent (not an
//! empty placeholder) while the field has no error.

use super::ui::{Input, Select, Textarea};
use contracts::shared::forms::{FieldDescriptor, FieldKind};
use leptos::prelude::*;

/// Error text worth showing; blank messages count as no error.
pub fn visible_error(error: Option<String>) -> Option<String> {
    error.filter(|message| !message.trim().is_empty())
}

pub fn error_id(descriptor: &FieldDescriptor) -> String {
    format!("{}-error", descriptor.input_id())
}

#[component]
pub fn FormField(
    descriptor: FieldDescriptor,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let input_id = descriptor.input_id();
    let message_id = error_id(&descriptor);
    let has_error = move || visible_error(error.get()).is_some();
    let described_by = Signal::derive({
        let message_id = message_id.clone();
        move || has_error().then(|| message_id.clone())
    });
    let blur = Callback::new(move |_: ()| {
        if let Some(handler) = on_blur {
            handler.run(());
        }
    });
    let invalid = Signal::derive(move || Some(has_error()));
    let placeholder = descriptor.placeholder.map(str::to_string);

    let widget = match descriptor.kind.clone() {
        FieldKind::Input(input_type) => view! {
            <Input
                id=input_id.clone()
                value=value
                input_type=input_type.as_str().to_string()
                placeholder=placeholder
                invalid=invalid
                described_by=described_by
                on_input=on_change
                on_blur=blur
            />
        }
        .into_any(),
        FieldKind::Textarea { rows } => view! {
            <Textarea
                id=input_id.clone()
                value=value
                rows=rows
                placeholder=placeholder
                invalid=invalid
                described_by=described_by
                on_input=on_change
                on_blur=blur
            />
        }
        .into_any(),
        FieldKind::Select { options } => view! {
            <Select
                id=input_id.clone()
                value=value
                options=options
                placeholder=placeholder
                invalid=invalid
                described_by=described_by
                on_change=on_change
                on_blur=blur
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group" class:form__group--invalid=has_error>
            <label class="form__label" for=input_id>
                {descriptor.label_text()}
            </label>
            {widget}
            {move || visible_error(error.get()).map(|message| view! {
                <p class="form__error" id=message_id.clone() role="alert">
                    {message}
                </p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_error() {
        assert_eq!(visible_error(None), None);
        assert_eq!(visible_error(Some(String::new())), None);
        assert_eq!(visible_error(Some("  ".to_string())), None);
        assert_eq!(
            visible_error(Some("Required".to_string())),
            Some("Required".to_string())
        );
    }

    #[test]
    fn test_error_id_follows_input_id() {
        let descriptor = FieldDescriptor::new("buyer_email", "Buyer email", FieldKind::email());
        assert_eq!(error_id(&descriptor), "field-buyer-email-error");
    }
}
