use super::control_class;
use leptos::prelude::*;

/// Single-line input (text, email, password, number, tel).
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text on every input event
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Called when the input loses focus
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Input type: "text" (default), "password", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Marks the control as failing validation
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Id of the element describing the error, for assistive tech
    #[prop(optional, into)]
    described_by: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <input
            id=move || id.get().unwrap_or_default()
            class=move || control_class("form__input", invalid.get().unwrap_or(false), &class.get().unwrap_or_default())
            type=input_t
            prop:value=move || value.get()
            placeholder=move || placeholder.get().unwrap_or_default()
            disabled=disabled
            aria-invalid=move || invalid.get().unwrap_or(false).to_string()
            aria-describedby=move || described_by.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
            on:blur=move |_| {
                if let Some(handler) = on_blur {
                    handler.run(());
                }
            }
        />
    }
}
