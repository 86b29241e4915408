use super::control_class;
use leptos::prelude::*;

/// Multi-line text input.
#[component]
pub fn Textarea(
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    #[prop(optional)]
    disabled: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    described_by: MaybeProp<String>,
) -> impl IntoView {
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <textarea
            id=move || id.get().unwrap_or_default()
            class=move || control_class("form__textarea", invalid.get().unwrap_or(false), "")
            placeholder=move || placeholder.get().unwrap_or_default()
            disabled=disabled
            rows=textarea_rows
            prop:value=move || value.get()
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
