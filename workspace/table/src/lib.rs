//! Headless state for the transaction table.
//!
//! [`TableController`] owns the query parameters (search, page, sort,
//! filters), hands out a [`FetchTicket`] for every change and applies fetch
//! results through a request-token guard. [`sequence`] computes the page
//! numbers of the pagination bar. Neither depends on a UI framework; the
//! frontend drives them from Yew hooks.

pub mod controller;
pub mod debounce;
pub mod query;
pub mod sequence;
pub mod source;

pub use controller::{FetchTicket, Page, RequestToken, Resolution, TableController};
pub use debounce::{DebounceTicket, Debouncer};
pub use query::{QueryState, SortDirection, TableConfig};
pub use sequence::{sequence, PageToken};
pub use source::{execute, PageSource};
