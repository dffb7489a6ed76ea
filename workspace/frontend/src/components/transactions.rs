mod filters;
mod panel;
mod table;

pub use panel::TransactionPanel;
pub use table::TransactionTable;
