//! Backend resources
//!
//! One module per REST resource: its filter set, its [`ResourceSpec`]
//! binding, and gateway/controller aliases.

pub mod cargos;
pub mod clients;
pub mod debtors;
pub mod products;
pub mod users;

pub use cargos::{CargoGateway, CargoList, Cargos};
pub use clients::{ClientGateway, ClientList, Clients};
pub use debtors::{DebtorFilters, DebtorGateway, DebtorList, Debtors};
pub use products::{ProductGateway, ProductList, Products};
pub use users::{UserGateway, UserList, Users};

use crate::resource::FilterParams;

/// Filter set shared by the resources that list by activity and search
///
/// Defaults mirror the dashboard's initial view: active records, empty
/// search. `None` drops the parameter from the request entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilters {
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl Default for ActiveFilters {
    fn default() -> Self {
        Self {
            is_active: Some(true),
            search: Some(String::new()),
        }
    }
}

impl ActiveFilters {
    /// No filtering at all
    pub fn any() -> Self {
        Self {
            is_active: None,
            search: None,
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }
}

impl FilterParams for ActiveFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(is_active) = self.is_active {
            pairs.push(("isActive", is_active.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}
