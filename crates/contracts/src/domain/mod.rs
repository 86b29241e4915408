pub mod a001_client;
pub mod a002_project;
pub mod a003_sale;
