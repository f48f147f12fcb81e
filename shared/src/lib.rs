//! Shared types for the back-office client
//!
//! Wire-level paging/sorting primitives, response envelopes and the
//! domain records exchanged with the backend REST API.

pub mod models;
pub mod request;
pub mod response;
pub mod validate;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use request::{Pagination, SortOrder, Sorting};
pub use response::{PageResult, Paginated, ResultEnvelope};
