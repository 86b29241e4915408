//! Declarative per-entity schemas and the `validate` entry point.

use super::rule::{CheckFn, Constraint, Rule};
use super::values::FormValues;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Ordered rules for one field.
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    fn new(field: &'static str) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    fn push(mut self, constraint: Constraint, message: impl Into<String>) -> Self {
        self.rules.push(Rule::new(constraint, message));
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.push(Constraint::Required, message)
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.push(Constraint::Email, message)
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.push(Constraint::MinLength(min), message)
    }

    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.push(Constraint::MaxLength(max), message)
    }

    pub fn number(self, message: impl Into<String>) -> Self {
        self.push(Constraint::Number, message)
    }

    pub fn min(self, min: f64, message: impl Into<String>) -> Self {
        self.push(Constraint::Min(min), message)
    }

    pub fn max(self, max: f64, message: impl Into<String>) -> Self {
        self.push(Constraint::Max(max), message)
    }

    pub fn digits(self, min: usize, max: usize, message: impl Into<String>) -> Self {
        self.push(Constraint::Digits { min, max }, message)
    }

    pub fn date(self, message: impl Into<String>) -> Self {
        self.push(Constraint::Date, message)
    }

    pub fn one_of(self, allowed: &[&str], message: impl Into<String>) -> Self {
        let allowed = allowed.iter().map(|s| s.to_string()).collect();
        self.push(Constraint::OneOf(allowed), message)
    }

    pub fn check<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str, &FormValues) -> bool + Send + Sync + 'static,
    {
        let check: CheckFn = Arc::new(predicate);
        self.push(Constraint::Check(check), message)
    }

    /// Message of the first failing rule; later rules are not evaluated.
    pub fn first_error(&self, candidate: &FormValues) -> Option<&str> {
        let value = candidate.get(self.field);
        self.rules
            .iter()
            .find(|rule| !rule.passes(value, candidate))
            .map(|rule| rule.message.as_str())
    }
}

/// Named, immutable set of field rules for one entity.
///
/// Built once through the consuming `field` builder; there are no mutating
/// methods afterwards.
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field<F>(mut self, field: &'static str, build: F) -> Self
    where
        F: FnOnce(FieldRules) -> FieldRules,
    {
        self.fields.push(build(FieldRules::new(field)));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    /// Error for a single field, used when a field loses focus.
    pub fn validate_field(&self, field: &str, candidate: &FormValues) -> Option<String> {
        self.fields
            .iter()
            .filter(|f| f.field == field)
            .find_map(|f| f.first_error(candidate))
            .map(str::to_string)
    }
}

/// Field name → message for every failed field. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.errors.remove(field);
    }
}

/// Runs every field of `schema` against `candidate`.
///
/// Fields are independent; within a field the first failing rule wins.
pub fn validate(schema: &Schema, candidate: &FormValues) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in &schema.fields {
        if errors.contains(field.field) {
            continue;
        }
        if let Some(message) = field.first_error(candidate) {
            errors.insert(field.field, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn contact_schema() -> Schema {
        Schema::new("contact")
            .field("name", |f| f.required("Name is required").min_length(2, "Too short"))
            .field("email", |f| f.email("Invalid email"))
    }

    #[test]
    fn test_optional_email_accepts_empty() {
        let schema = contact_schema();
        let errors = validate(&schema, &FormValues::new().with("name", "Ann").with("email", ""));
        assert!(errors.is_valid());
        assert!(!errors.contains("email"));
    }

    #[test]
    fn test_optional_email_rejects_malformed() {
        let schema = contact_schema();
        let errors = validate(
            &schema,
            &FormValues::new().with("name", "Ann").with("email", "not-an-email"),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Invalid email"));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let schema = contact_schema();
        let errors = validate(&schema, &FormValues::new());
        assert_eq!(errors.get("name"), Some("Name is required"));

        let errors = validate(&schema, &FormValues::new().with("name", "A"));
        assert_eq!(errors.get("name"), Some("Too short"));
    }

    #[test]
    fn test_later_rules_not_evaluated_after_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let schema = Schema::new("single").field("x", |f| {
            f.required("required").check(
                move |_, _| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    true
                },
                "never",
            )
        });

        validate(&schema, &FormValues::new());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        validate(&schema, &FormValues::new().with("x", "set"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fields_fail_independently() {
        let schema = contact_schema();
        let errors = validate(&schema, &FormValues::new().with("email", "bad"));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
    }

    #[test]
    fn test_passing_fields_are_absent() {
        let schema = contact_schema();
        let errors = validate(&schema, &FormValues::new().with("email", "a@b.co"));
        assert_eq!(errors.get("email"), None);
        assert_eq!(errors.iter().count(), 1);
    }

    #[test]
    fn test_validate_field_matches_full_run() {
        let schema = contact_schema();
        let candidate = FormValues::new().with("name", "A").with("email", "x");
        let full = validate(&schema, &candidate);
        assert_eq!(schema.validate_field("name", &candidate).as_deref(), full.get("name"));
        assert_eq!(schema.validate_field("email", &candidate).as_deref(), full.get("email"));
        assert_eq!(schema.validate_field("unknown", &candidate), None);
    }
}
