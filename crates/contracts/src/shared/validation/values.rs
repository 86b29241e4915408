//! Candidate values a form hands to the validation layer.

use std::collections::BTreeMap;

/// Flat map of field name to its current textual value.
///
/// Forms edit strings, so every value is kept as entered. A missing key reads
/// as an empty string; rules never have to distinguish "absent" from "blank".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for fixtures and defaults.
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    pub fn is_blank(&self, field: &str) -> bool {
        self.get(field).trim().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_empty() {
        let values = FormValues::new().with("name", "Acme");
        assert_eq!(values.get("name"), "Acme");
        assert_eq!(values.get("email"), "");
        assert!(values.is_blank("email"));
    }

    #[test]
    fn test_whitespace_is_blank() {
        let values = FormValues::new().with("name", "   ");
        assert!(values.is_blank("name"));
    }
}
