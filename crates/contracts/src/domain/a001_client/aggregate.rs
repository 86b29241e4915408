use crate::shared::forms::{FieldDescriptor, FieldKind};
use crate::shared::validation::{FormValues, Schema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    Lead,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Lead => "lead",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Lead => "Lead",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "inactive" => Self::Inactive,
            "lead" => Self::Lead,
            _ => Self::Active,
        }
    }

    pub fn all() -> [ClientStatus; 3] {
        [Self::Active, Self::Inactive, Self::Lead]
    }
}

// ============================================================================
// Record
// ============================================================================

/// Tenant, owner or company the portfolio works with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: ClientStatus,
    pub notes: String,
}

impl Client {
    /// Builds a new record from already validated form values.
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            id: ClientId::new_v4(),
            name: values.get("name").trim().to_string(),
            email: values.get("email").trim().to_string(),
            phone: values.get("phone").trim().to_string(),
            company: values.get("company").trim().to_string(),
            status: ClientStatus::from_str(values.get("status")),
            notes: values.get("notes").to_string(),
        }
    }
}

// ============================================================================
// Form
// ============================================================================

pub fn client_schema() -> Schema {
    let statuses: Vec<&str> = ClientStatus::all().iter().map(|s| s.as_str()).collect();
    Schema::new("client")
        .field("name", |f| {
            f.required("Name is required")
                .min_length(2, "Name must be at least 2 characters")
        })
        .field("email", |f| f.email("Enter a valid email address"))
        .field("phone", |f| {
            f.digits(10, 15, "Phone must contain 10 to 15 digits")
        })
        .field("company", |f| {
            f.max_length(100, "Company must be at most 100 characters")
        })
        .field("status", |f| {
            f.required("Status is required")
                .one_of(&statuses, "Unknown status")
        })
}

pub fn client_fields() -> Vec<FieldDescriptor> {
    let statuses: Vec<(&str, &str)> = ClientStatus::all()
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect();
    vec![
        FieldDescriptor::new("name", "Full name", FieldKind::text())
            .required()
            .placeholder("Jane Doe"),
        FieldDescriptor::new("email", "Email", FieldKind::email())
            .placeholder("jane@example.com"),
        FieldDescriptor::new("phone", "Phone", FieldKind::tel()).placeholder("+1 555 123 4567"),
        FieldDescriptor::new("company", "Company", FieldKind::text()),
        FieldDescriptor::new("status", "Status", FieldKind::select(&statuses)).required(),
        FieldDescriptor::new("notes", "Notes", FieldKind::textarea()),
    ]
}

/// Initial values of an empty client form.
pub fn client_defaults() -> FormValues {
    FormValues::new().with("status", ClientStatus::Active.as_str())
}
