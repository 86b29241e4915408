//! Editing state of one form: values, errors and touched fields.

use contracts::shared::validation::{validate, FormValues, Schema, ValidationErrors};
use std::collections::BTreeSet;

/// Errors appear for a field once it has been blurred, and for every field
/// after a submit attempt. From then on they follow each edit.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: Schema,
    defaults: FormValues,
    values: FormValues,
    errors: ValidationErrors,
    touched: BTreeSet<String>,
}

impl FormState {
    pub fn new(schema: Schema, defaults: FormValues) -> Self {
        Self {
            schema,
            values: defaults.clone(),
            defaults,
            errors: ValidationErrors::default(),
            touched: BTreeSet::new(),
        }
    }

    /// Name of the schema the form validates against.
    pub fn schema_name(&self) -> &'static str {
        self.schema.name()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> String {
        self.values.get(field).to_string()
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn set_value(&mut self, field: &str, value: String) {
        self.values.set(field, value);
        if self.touched.is_empty() {
            return;
        }
        // Cross-field rules: an edit can fix or break another touched field.
        let touched: Vec<String> = self.touched.iter().cloned().collect();
        for name in touched {
            self.revalidate(&name);
        }
    }

    pub fn blur(&mut self, field: &str) {
        self.touched.insert(field.to_string());
        self.revalidate(field);
    }

    /// Validates everything. Returns the values when valid.
    pub fn submit(&mut self) -> Result<FormValues, ValidationErrors> {
        for field in self.schema.fields() {
            self.touched.insert(field.field.to_string());
        }
        self.errors = validate(&self.schema, &self.values);
        if self.errors.is_valid() {
            Ok(self.values.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.errors = ValidationErrors::default();
        self.touched.clear();
    }

    fn revalidate(&mut self, field: &str) {
        match self.schema.validate_field(field, &self.values) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_sale::aggregate::{sale_defaults, sale_schema};

    fn state() -> FormState {
        FormState::new(sale_schema(), sale_defaults())
    }

    #[test]
    fn test_no_errors_before_interaction() {
        let mut form = state();
        form.set_value("buyer", "T".to_string());
        assert_eq!(form.error("buyer"), None);
        assert!(form.errors().is_valid());
    }

    #[test]
    fn test_blur_shows_field_error() {
        let mut form = state();
        form.blur("buyer");
        assert_eq!(form.error("buyer").as_deref(), Some("Buyer is required"));
        assert_eq!(form.error("property"), None);

        form.set_value("buyer", "Tom".to_string());
        assert_eq!(form.error("buyer"), None);
    }

    #[test]
    fn test_submit_reports_all_fields() {
        let mut form = state();
        let errors = form.submit().unwrap_err();
        assert!(errors.contains("property"));
        assert!(errors.contains("buyer"));
        assert!(errors.contains("amount"));
        assert!(form.is_touched("installments"));
    }

    #[test]
    fn test_submit_returns_values_when_valid() {
        let mut form = state();
        form.set_value("property", "12 Elm Street".to_string());
        form.set_value("buyer", "Tom Reyes".to_string());
        form.set_value("amount", "1000".to_string());
        let values = form.submit().unwrap();
        assert_eq!(values.get("buyer"), "Tom Reyes");
        assert_eq!(values.get("payment_method"), "cash");
    }

    #[test]
    fn test_cross_field_error_follows_other_field() {
        let mut form = state();
        form.blur("installments");
        assert_eq!(form.error("installments"), None);

        form.set_value("payment_method", "installments".to_string());
        assert_eq!(
            form.error("installments").as_deref(),
            Some("Number of installments is required")
        );

        form.set_value("payment_method", "cash".to_string());
        assert_eq!(form.error("installments"), None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = state();
        form.set_value("buyer", "Tom".to_string());
        let _ = form.submit();
        form.reset();
        assert_eq!(form.value("buyer"), "");
        assert_eq!(form.value("payment_method"), "cash");
        assert!(form.errors().is_valid());
        assert!(!form.is_touched("buyer"));
    }

    #[test]
    fn test_schema_name_is_exposed() {
        assert_eq!(state().schema_name(), sale_schema().name());
        assert_eq!(state().schema_name(), "sale");
    }
}
