//! Request types for the shared crate
//!
//! Paging and ordering parameters as the UI layer sees them. Pages are
//! 1-based here; the backend speaks 0-based pages, the conversion happens
//! at the gateway boundary.

use serde::{Deserialize, Serialize};

/// Pagination state for a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Total number of items, as last reported by the server
    #[serde(default)]
    pub total: u64,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            total: 0,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        Self {
            page,
            per_page,
            total,
        }
    }

    /// Page number in the backend's 0-based convention
    pub fn zero_based_page(&self) -> u32 {
        self.page.saturating_sub(1)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Ordering state for a list view
///
/// Both the field and the direction must be set for a sort parameter to be
/// produced; otherwise no `sort` query parameter is sent at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
    /// Field to sort by (must be a field of the resource)
    pub sort_by: Option<String>,

    /// Sort direction; `None` disables sorting
    pub order: Option<SortOrder>,
}

impl Default for Sorting {
    fn default() -> Self {
        Self::asc("id")
    }
}

impl Sorting {
    /// Ascending sort on the given field
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            sort_by: Some(field.into()),
            order: Some(SortOrder::Asc),
        }
    }

    /// Descending sort on the given field
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            sort_by: Some(field.into()),
            order: Some(SortOrder::Desc),
        }
    }

    /// No sorting
    pub fn none() -> Self {
        Self {
            sort_by: None,
            order: None,
        }
    }

    /// Backend sort parameter: `"<field>,<asc|desc>"`
    pub fn to_param(&self) -> Option<String> {
        match (&self.sort_by, &self.order) {
            (Some(field), Some(order)) => Some(format!("{},{}", field, order.as_str())),
            _ => None,
        }
    }
}
