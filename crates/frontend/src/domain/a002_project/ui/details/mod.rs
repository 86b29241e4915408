use crate::shared::components::schema_form::SchemaForm;
use crate::shared::data::use_mock_data;
use crate::shared::modal::{ModalSize, ResponsiveModal};
use crate::shared::state::FormState;
use contracts::domain::a002_project::aggregate::{
    project_defaults, project_fields, project_schema, Project,
};
use contracts::shared::validation::FormValues;
use leptos::prelude::*;

/// "New project" form; the client selector lists the current clients.
#[component]
pub fn ProjectDetails(on_saved: Callback<Project>, on_close: Callback<()>) -> impl IntoView {
    let data = use_mock_data();
    let state = RwSignal::new(FormState::new(project_schema(), project_defaults()));
    let choices = data.client_choices();
    let choice_refs: Vec<(&str, &str)> = choices
        .iter()
        .map(|(id, name)| (id.as_str(), name.as_str()))
        .collect();
    let fields = project_fields(&choice_refs);

    let on_submit = Callback::new(move |values: FormValues| {
        state.update(FormState::reset);
        on_saved.run(Project::from_values(&values));
    });

    view! {
        <ResponsiveModal title="New project" on_close=on_close size=ModalSize::Lg>
            <SchemaForm
                fields=fields
                state=state
                submit_label="Create project"
                on_submit=on_submit
                on_cancel=on_close
            />
        </ResponsiveModal>
    }
}
