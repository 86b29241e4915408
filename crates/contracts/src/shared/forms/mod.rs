//! Form field descriptors: how a field is rendered, independent of how it is
//! validated.

mod field;

pub use field::{FieldDescriptor, FieldKind, InputType, SelectOption};
