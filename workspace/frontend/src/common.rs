pub mod alert;
pub mod debounce_hook;
pub mod error;
pub mod fetch_hook;
pub mod loading;
pub mod sidebar;
pub mod table_hook;
pub mod toast;
