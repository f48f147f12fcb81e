//! API response types
//!
//! The backend serves Spring-style page envelopes. Most resources wrap the
//! payload in a `result` object; the product endpoints return it at the
//! response root. Callers of this crate only ever see the canonical
//! [`Paginated`] shape.

use serde::{Deserialize, Serialize};

use crate::request::Pagination;

/// Wrapper used by resources that nest their payload under `result`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

/// Backend page envelope
///
/// `number` is the 0-based page index as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
}

/// Canonical paginated list shape returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> From<PageResult<T>> for Paginated<T> {
    fn from(page: PageResult<T>) -> Self {
        Self {
            pagination: Pagination::new(page.number + 1, page.size, page.total_elements),
            items: page.content,
        }
    }
}
