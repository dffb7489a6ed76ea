pub mod common;
pub mod dashboard;
pub mod layout;
pub mod maintenance;
pub mod settings;
pub mod transactions;
pub mod upload;
