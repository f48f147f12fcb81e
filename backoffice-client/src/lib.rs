//! Back-office client - data access layer for the admin dashboard
//!
//! Provides typed, paginated access to the backend REST resources and a
//! stateful list controller per resource. Two layers:
//!
//! - [`ResourceGateway`] translates filter/sort/page state into backend
//!   query parameters and reshapes the page envelope into the canonical
//!   [`shared::Paginated`] form.
//! - [`ListController`] owns the reactive list state (loading flag, items,
//!   filters, sorting, pagination) and refetches when that state changes.

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod list;
pub mod resource;
pub mod resources;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::ResourceGateway;
pub use http::HttpClient;
pub use list::{ListController, ListControllerBuilder};
pub use resource::{Envelope, FilterParams, ResourceSpec};
pub use session::{
    AuthEvents, Credential, CredentialFile, NoopAuthEvents, SessionProvider, SessionStore,
    StaticToken,
};

// Re-export shared types for convenience
pub use shared::{PageResult, Paginated, Pagination, SortOrder, Sorting};
