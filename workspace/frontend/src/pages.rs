pub mod dashboard;
pub mod not_found;
pub mod reports;
pub mod settings;
pub mod transactions;
pub mod upload;
