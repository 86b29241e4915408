use serde::{Deserialize, Serialize};

/// One entry of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Variants of the single-line input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
    Number,
    Tel,
}

impl InputType {
    /// Value for the HTML `type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
        }
    }
}

/// Closed set of widget kinds. Data a widget needs lives on its variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Input(InputType),
    Textarea { rows: u32 },
    /// An empty option list is allowed and renders an inert selector.
    Select { options: Vec<SelectOption> },
}

impl FieldKind {
    pub const DEFAULT_TEXTAREA_ROWS: u32 = 3;

    pub fn text() -> Self {
        Self::Input(InputType::Text)
    }

    pub fn email() -> Self {
        Self::Input(InputType::Email)
    }

    pub fn password() -> Self {
        Self::Input(InputType::Password)
    }

    pub fn number() -> Self {
        Self::Input(InputType::Number)
    }

    pub fn tel() -> Self {
        Self::Input(InputType::Tel)
    }

    pub fn textarea() -> Self {
        Self::Textarea {
            rows: Self::DEFAULT_TEXTAREA_ROWS,
        }
    }

    pub fn select(options: &[(&str, &str)]) -> Self {
        Self::Select {
            options: options
                .iter()
                .map(|(value, label)| SelectOption::new(*value, *label))
                .collect(),
        }
    }
}

/// Static description of one rendered field, supplied by the calling form.
///
/// `required` only drives the label marker; enforcement belongs to the
/// entity's validation schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Label text with the required marker appended.
    pub fn label_text(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// DOM id for the widget, derived from the field name.
    pub fn input_id(&self) -> String {
        format!("field-{}", self.name.replace('_', "-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_marker_in_label() {
        let plain = FieldDescriptor::new("email", "Email", FieldKind::email());
        assert_eq!(plain.label_text(), "Email");
        assert_eq!(plain.clone().required().label_text(), "Email *");
    }

    #[test]
    fn test_input_type_strings() {
        assert_eq!(InputType::Tel.as_str(), "tel");
        assert_eq!(InputType::Number.as_str(), "number");
    }

    #[test]
    fn test_select_builder_keeps_order() {
        let kind = FieldKind::select(&[("a", "Alpha"), ("b", "Beta")]);
        let FieldKind::Select { options } = kind else {
            panic!("expected select");
        };
        assert_eq!(options[0], SelectOption::new("a", "Alpha"));
        assert_eq!(options[1].label, "Beta");
    }

    #[test]
    fn test_input_id() {
        let field = FieldDescriptor::new("client_id", "Client", FieldKind::text());
        assert_eq!(field.input_id(), "field-client-id");
    }
}
