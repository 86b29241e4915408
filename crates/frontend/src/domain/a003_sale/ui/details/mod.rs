use crate::shared::components::schema_form::SchemaForm;
use crate::shared::modal::{ModalSize, ResponsiveModal};
use crate::shared::state::FormState;
use contracts::domain::a003_sale::aggregate::{sale_defaults, sale_fields, sale_schema, Sale};
use contracts::shared::validation::FormValues;
use leptos::prelude::*;

#[component]
pub fn SaleDetails(on_saved: Callback<Sale>, on_close: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(FormState::new(sale_schema(), sale_defaults()));

    let on_submit = Callback::new(move |values: FormValues| {
        state.update(FormState::reset);
        on_saved.run(Sale::from_values(&values));
    });

    view! {
        <ResponsiveModal title="Record sale" on_close=on_close size=ModalSize::Md>
            <SchemaForm
                fields=sale_fields()
                state=state
                submit_label="Save sale"
                on_submit=on_submit
                on_cancel=on_close
            />
        </ResponsiveModal>
    }
}
