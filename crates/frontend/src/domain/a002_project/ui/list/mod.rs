use crate::domain::a002_project::ui::details::ProjectDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{
    format_currency, Column, ColumnPriority, ResponsiveTable, TableRecord,
};
use crate::shared::data::use_mock_data;
use crate::shared::icons::icon;
use contracts::domain::a002_project::aggregate::Project;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectRow {
    pub name: String,
    pub client: String,
    pub status: String,
    pub budget: f64,
    pub start_date: String,
    pub end_date: String,
}

impl ProjectRow {
    /// `client` is the owner's display name, if the owner still exists.
    pub fn new(project: &Project, client: Option<String>) -> Self {
        Self {
            name: project.name.clone(),
            client: client.unwrap_or_else(|| "-".to_string()),
            status: project.status.label().to_string(),
            budget: project.budget,
            start_date: project.start_date.clone(),
            end_date: project.end_date.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl TableRecord for ProjectRow {
    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "client" => self.client.clone(),
            "status" => self.status.clone(),
            "budget" => format_currency(self.budget),
            "start_date" => self.start_date.clone(),
            "end_date" => self.end_date.clone(),
            _ => String::new(),
        }
    }
}

fn columns() -> Vec<Column<ProjectRow>> {
    vec![
        Column::new("name", "Project").priority(ColumnPriority::High),
        Column::new("status", "Status").priority(ColumnPriority::High),
        Column::new("client", "Client").priority(ColumnPriority::Medium),
        Column::new("budget", "Budget").priority(ColumnPriority::Medium),
        Column::new("start_date", "Start").priority(ColumnPriority::Low),
        Column::new("end_date", "End").priority(ColumnPriority::Low),
    ]
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let data = use_mock_data();
    let show_modal = RwSignal::new(false);
    let rows = Signal::derive(move || {
        data.projects.with(|projects| {
            projects
                .iter()
                .map(|p| ProjectRow::new(p, data.client_name(&p.client_id)))
                .collect::<Vec<_>>()
        })
    });

    let on_saved = Callback::new(move |project: Project| {
        log::info!("project '{}' added", project.name);
        data.projects.update(|projects| projects.push(project));
        show_modal.set(false);
    });

    view! {
        <div class="page">
            <PageHeader title="Projects">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_modal.set(true)>
                    {icon("plus")}
                    " New project"
                </Button>
            </PageHeader>
            <ResponsiveTable columns=columns() rows=rows empty_message="No projects yet" />
            <Show when=move || show_modal.get()>
                <ProjectDetails on_saved=on_saved on_close=Callback::new(move |_| show_modal.set(false)) />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_project::aggregate::{ProjectId, ProjectStatus};

    fn project() -> Project {
        Project {
            id: ProjectId::new_v4(),
            name: "Roof".to_string(),
            client_id: "gone".to_string(),
            status: ProjectStatus::OnHold,
            budget: 1234.5,
            start_date: "2025-01-01".to_string(),
            end_date: None,
            description: String::new(),
        }
    }

    #[test]
    fn test_row_formats_budget_and_missing_values() {
        let row = ProjectRow::new(&project(), None);
        assert_eq!(row.cell("budget"), "$1,234.50");
        assert_eq!(row.cell("client"), "-");
        assert_eq!(row.cell("end_date"), "-");
        assert_eq!(row.cell("status"), ProjectStatus::OnHold.label());
    }

    #[test]
    fn test_row_uses_client_name() {
        let row = ProjectRow::new(&project(), Some("Maria Lopez".to_string()));
        assert_eq!(row.cell("client"), "Maria Lopez");
    }
}
