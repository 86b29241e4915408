pub mod container;
pub mod form_field;
pub mod page_header;
pub mod schema_form;
pub mod stat_card;
pub mod table;
pub mod ui;
