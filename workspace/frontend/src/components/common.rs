mod dropzone;
mod pagination;
mod search;
mod select;

pub use dropzone::Dropzone;
pub use pagination::Pagination;
pub use search::Search;
pub use select::{Select, SelectOption};
