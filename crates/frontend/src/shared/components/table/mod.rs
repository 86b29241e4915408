pub mod columns;
pub mod number_format;
pub mod responsive_table;

pub use columns::{BodyContent, Column, ColumnPriority, RowExpansion, TableMode, TableRecord, DEFAULT_EMPTY_MESSAGE};
pub use number_format::*;
pub use responsive_table::ResponsiveTable;
