use crate::shared::forms::{FieldDescriptor, FieldKind};
use crate::shared::validation::{parse_date, parse_number, FormValues, Schema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::OnHold => "On hold",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => Self::Active,
            "completed" => Self::Completed,
            "on_hold" => Self::OnHold,
            _ => Self::Planning,
        }
    }

    pub fn all() -> [ProjectStatus; 4] {
        [Self::Planning, Self::Active, Self::Completed, Self::OnHold]
    }
}

/// Development or renovation project run for a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub client_id: String,
    pub status: ProjectStatus,
    pub budget: f64,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
}

impl Project {
    pub fn from_values(values: &FormValues) -> Self {
        let end_date = values.get("end_date").trim();
        Self {
            id: ProjectId::new_v4(),
            name: values.get("name").trim().to_string(),
            client_id: values.get("client_id").to_string(),
            status: ProjectStatus::from_str(values.get("status")),
            budget: parse_number(values.get("budget")).unwrap_or(0.0),
            start_date: values.get("start_date").trim().to_string(),
            end_date: (!end_date.is_empty()).then(|| end_date.to_string()),
            description: values.get("description").to_string(),
        }
    }
}

/// True when `end` is empty, unparsable (reported by its own rule), or not
/// before `start`.
fn ends_after_start(end: &str, values: &FormValues) -> bool {
    match (parse_date(values.get("start_date")), parse_date(end)) {
        (Some(start), Some(end)) => end >= start,
        _ => true,
    }
}

pub fn project_schema() -> Schema {
    let statuses: Vec<&str> = ProjectStatus::all().iter().map(|s| s.as_str()).collect();
    Schema::new("project")
        .field("name", |f| {
            f.required("Project name is required")
                .max_length(120, "Project name must be at most 120 characters")
        })
        .field("client_id", |f| f.required("Select a client"))
        .field("status", |f| {
            f.required("Status is required")
                .one_of(&statuses, "Unknown status")
        })
        .field("budget", |f| {
            f.number("Budget must be a number")
                .min(0.0, "Budget cannot be negative")
        })
        .field("start_date", |f| {
            f.required("Start date is required")
                .date("Use the YYYY-MM-DD format")
        })
        .field("end_date", |f| {
            f.date("Use the YYYY-MM-DD format")
                .check(ends_after_start, "End date cannot be before the start date")
        })
}

/// Descriptors for the project form; client choices come from the caller.
pub fn project_fields(clients: &[(&str, &str)]) -> Vec<FieldDescriptor> {
    let statuses: Vec<(&str, &str)> = ProjectStatus::all()
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect();
    vec![
        FieldDescriptor::new("name", "Project name", FieldKind::text()).required(),
        FieldDescriptor::new("client_id", "Client", FieldKind::select(clients)).required(),
        FieldDescriptor::new("status", "Status", FieldKind::select(&statuses)).required(),
        FieldDescriptor::new("budget", "Budget", FieldKind::number()).placeholder("0.00"),
        FieldDescriptor::new("start_date", "Start date", FieldKind::text())
            .required()
            .placeholder("YYYY-MM-DD"),
        FieldDescriptor::new("end_date", "End date", FieldKind::text()).placeholder("YYYY-MM-DD"),
        FieldDescriptor::new("description", "Description", FieldKind::Textarea { rows: 4 }),
    ]
}

pub fn project_defaults() -> FormValues {
    FormValues::new().with("status", ProjectStatus::Planning.as_str())
}
