//! Single-field constraint rules.

use super::values::FormValues;
use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;

/// Predicate over one field value and the whole candidate.
pub type CheckFn = Arc<dyn Fn(&str, &FormValues) -> bool + Send + Sync>;

/// What a rule requires of a value.
///
/// Everything except `Required` and `Check` accepts an empty value: an optional
/// field left blank is valid, and emptiness is only ever `Required`'s concern.
#[derive(Clone)]
pub enum Constraint {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
    Number,
    Min(f64),
    Max(f64),
    /// Digit-only text (spaces, dashes, parentheses and a leading `+` are
    /// ignored) whose digit count lies within `min..=max`.
    Digits { min: usize, max: usize },
    /// Calendar date in `YYYY-MM-DD` form.
    Date,
    OneOf(Vec<String>),
    /// Arbitrary predicate; sees the whole candidate, so it carries
    /// cross-field conditions.
    Check(CheckFn),
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "Required"),
            Self::Email => write!(f, "Email"),
            Self::MinLength(n) => write!(f, "MinLength({n})"),
            Self::MaxLength(n) => write!(f, "MaxLength({n})"),
            Self::Number => write!(f, "Number"),
            Self::Min(v) => write!(f, "Min({v})"),
            Self::Max(v) => write!(f, "Max({v})"),
            Self::Digits { min, max } => write!(f, "Digits({min}..={max})"),
            Self::Date => write!(f, "Date"),
            Self::OneOf(values) => write!(f, "OneOf({values:?})"),
            Self::Check(_) => write!(f, "Check(<fn>)"),
        }
    }
}

/// A constraint paired with the message shown when it fails.
#[derive(Debug, Clone)]
pub struct Rule {
    pub constraint: Constraint,
    pub message: String,
}

impl Rule {
    pub fn new(constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            constraint,
            message: message.into(),
        }
    }

    /// Returns true when `value` satisfies the rule.
    pub fn passes(&self, value: &str, candidate: &FormValues) -> bool {
        let trimmed = value.trim();
        match &self.constraint {
            Constraint::Required => !trimmed.is_empty(),
            Constraint::Check(check) => check(value, candidate),
            _ if trimmed.is_empty() => true,
            Constraint::Email => is_email(trimmed),
            Constraint::MinLength(min) => trimmed.chars().count() >= *min,
            Constraint::MaxLength(max) => trimmed.chars().count() <= *max,
            Constraint::Number => parse_number(trimmed).is_some(),
            Constraint::Min(min) => parse_number(trimmed).is_some_and(|v| v >= *min),
            Constraint::Max(max) => parse_number(trimmed).is_some_and(|v| v <= *max),
            Constraint::Digits { min, max } => digit_count(trimmed)
                .is_some_and(|count| (*min..=*max).contains(&count)),
            Constraint::Date => parse_date(trimmed).is_some(),
            Constraint::OneOf(allowed) => allowed.iter().any(|a| a == trimmed),
        }
    }
}

pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn digit_count(value: &str) -> Option<usize> {
    let body = value.strip_prefix('+').unwrap_or(value);
    let mut count = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => count += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return None,
        }
    }
    Some(count)
}

/// `local@domain.tld` with no whitespace, one `@`, and a dotted domain whose
/// labels are non-empty.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}
