use serde::{Deserialize, Serialize};

/// Three-state sort indicator for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// No explicit ordering is requested; the source applies its default.
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Transition taken when the already active column is selected again.
    pub fn cycle(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    /// Value of the `sort_order` query parameter.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            SortDirection::None => Option::None,
            SortDirection::Ascending => Some("ASC"),
            SortDirection::Descending => Some("DESC"),
        }
    }
}

/// Initial parameters of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub page_size: u32,
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            sort_key: None,
            sort_direction: SortDirection::None,
        }
    }
}

/// Every parameter that decides which rows the remote source returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryState {
    pub search_text: String,
    pub page: u32,
    pub page_size: u32,
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
    pub type_filter: String,
    pub status_filter: String,
}

impl QueryState {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            search_text: String::new(),
            page: 1,
            page_size: config.page_size.max(1),
            sort_key: config.sort_key.clone(),
            sort_direction: config.sort_direction,
            type_filter: String::new(),
            status_filter: String::new(),
        }
    }

    /// Selecting a new column starts at ascending, the active column cycles.
    pub fn select_sort(&mut self, key: &str) {
        if self.sort_key.as_deref() == Some(key) {
            self.sort_direction = self.sort_direction.cycle();
        } else {
            self.sort_key = Some(key.to_string());
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// The ordering actually requested; `None` while the direction is unset.
    pub fn effective_sort(&self) -> Option<(&str, SortDirection)> {
        match (&self.sort_key, self.sort_direction) {
            (Some(_), SortDirection::None) | (None, _) => None,
            (Some(key), direction) => Some((key.as_str(), direction)),
        }
    }

    /// Direction shown in the header of `key`.
    pub fn direction_for(&self, key: &str) -> SortDirection {
        match self.effective_sort() {
            Some((active, direction)) if active == key => direction,
            _ => SortDirection::None,
        }
    }

    /// Query string parameters for `GET /transactions`.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if !self.search_text.is_empty() {
            params.push(("search", self.search_text.clone()));
        }
        if let Some((key, direction)) = self.effective_sort() {
            if let Some(order) = direction.as_param() {
                params.push(("sort_by", key.to_string()));
                params.push(("sort_order", order.to_string()));
            }
        }
        if !self.type_filter.is_empty() {
            params.push(("type", self.type_filter.clone()));
        }
        if !self.status_filter.is_empty() {
            params.push(("status", self.status_filter.clone()));
        }
        params
    }
}
