use crate::shared::components::schema_form::SchemaForm;
use crate::shared::modal::{ModalSize, ResponsiveModal};
use crate::shared::state::FormState;
use contracts::domain::a001_client::aggregate::{client_defaults, client_fields, client_schema, Client};
use contracts::shared::validation::FormValues;
use leptos::prelude::*;

/// "New client" form in a modal.
#[component]
pub fn ClientDetails(on_saved: Callback<Client>, on_close: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(FormState::new(client_schema(), client_defaults()));

    let on_submit = Callback::new(move |values: FormValues| {
        state.update(FormState::reset);
        on_saved.run(Client::from_values(&values));
    });

    view! {
        <ResponsiveModal title="New client" on_close=on_close size=ModalSize::Md>
            <SchemaForm
                fields=client_fields()
                state=state
                submit_label="Create client"
                on_submit=on_submit
                on_cancel=on_close
            />
        </ResponsiveModal>
    }
}
