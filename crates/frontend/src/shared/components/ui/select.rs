use super::control_class;
use contracts::shared::forms::SelectOption;
use leptos::prelude::*;

/// Single-select. With no options it renders an empty, disabled selector.
#[component]
pub fn Select(
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    options: Vec<SelectOption>,
    /// Text of the leading empty choice
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    described_by: MaybeProp<String>,
) -> impl IntoView {
    let inert = disabled || options.is_empty();

    view! {
        <select
            id=move || id.get().unwrap_or_default()
            class=move || control_class("form__select", invalid.get().unwrap_or(false), "")
            disabled=inert
            aria-invalid=move || invalid.get().unwrap_or(false).to_string()
            aria-describedby=move || described_by.get()
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
            on:blur=move |_| {
                if let Some(handler) = on_blur {
                    handler.run(());
                }
            }
        >
            <option value="" selected=move || value.get().is_empty()>
                {move || placeholder.get().unwrap_or_else(|| "Select…".to_string())}
            </option>
            {options
                .into_iter()
                .map(|SelectOption { value: option_value, label }| {
                    let current = option_value.clone();
                    view! {
                        <option value=option_value selected=move || value.get() == current>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
