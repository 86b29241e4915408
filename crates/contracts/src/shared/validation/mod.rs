//! Declarative validation, decoupled from any UI binding.
//!
//! A [`Schema`] maps field names to ordered [`Rule`]s. [`validate`] evaluates
//! a [`FormValues`] candidate and reports failures as data: the returned
//! [`ValidationErrors`] is empty when the candidate is valid.
//!
//! ```rust,ignore
//! let schema = Schema::new("client")
//!     .field("name", |f| f.required("Name is required"))
//!     .field("email", |f| f.email("Enter a valid email"));
//!
//! let errors = validate(&schema, &FormValues::new().with("name", "Ann"));
//! assert!(errors.is_valid());
//! ```

mod rule;
mod schema;
mod values;

pub use rule::{parse_date, parse_number, CheckFn, Constraint, Rule};
pub use schema::{validate, FieldRules, Schema, ValidationErrors};
pub use values::FormValues;
