use common::ApiError;

pub use crate::common::debounce_hook::use_debounced;
pub use crate::common::fetch_hook::use_fetch_with_refetch;
pub use crate::common::table_hook::{use_table, UseTableHandle};

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(ApiError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}
