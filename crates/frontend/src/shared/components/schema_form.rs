//! Form assembled from field descriptors and driven by a [`FormState`].

use super::form_field::FormField;
use crate::shared::state::FormState;
use contracts::shared::forms::FieldDescriptor;
use contracts::shared::validation::FormValues;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn SchemaForm(
    fields: Vec<FieldDescriptor>,
    state: RwSignal<FormState>,
    #[prop(into)]
    submit_label: String,
    /// Receives the values only when every rule passes.
    on_submit: Callback<FormValues>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let rows = fields
        .into_iter()
        .map(|descriptor| {
            let name = descriptor.name;
            let value = Signal::derive(move || state.with(|s| s.value(name)));
            let error = Signal::derive(move || state.with(|s| s.error(name)));
            let on_change = Callback::new(move |v: String| state.update(|s| s.set_value(name, v)));
            let on_blur = Callback::new(move |_: ()| state.update(|s| s.blur(name)));
            view! {
                <FormField
                    descriptor=descriptor
                    value=value
                    on_change=on_change
                    on_blur=on_blur
                    error=error
                />
            }
        })
        .collect_view();

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = state.with_untracked(|s| s.schema_name());
        match state.try_update(|s| s.submit()) {
            Some(Ok(values)) => {
                log::info!("{} form submitted", form);
                on_submit.run(values);
            }
            Some(Err(errors)) => log::debug!("{} form rejected with {} error(s)", form, errors.len()),
            None => {}
        }
    };

    view! {
        <form class="form" novalidate=true on:submit=handle_submit>
            <div class="form__fields">{rows}</div>
            <div class="form__actions">
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
                <button type="submit" class="button button--primary">
                    {submit_label}
                </button>
            </div>
        </form>
    }
}
