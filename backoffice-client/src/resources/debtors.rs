//! Debtor resource

use chrono::NaiveDate;
use shared::models::{Debtor, DebtorStatus};

use crate::gateway::ResourceGateway;
use crate::list::ListController;
use crate::resource::{Envelope, FilterParams, ResourceSpec, comma_join};

/// Filter set of the debtor list
///
/// The client and status selections are sent even when empty, matching the
/// backend's expectation of a (possibly empty) comma-joined list; the date
/// bounds are dropped from the request when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtorFilters {
    pub search: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub selected_clients: Vec<i64>,
    pub selected_statuses: Vec<DebtorStatus>,
}

impl Default for DebtorFilters {
    fn default() -> Self {
        Self {
            search: Some(String::new()),
            date_from: None,
            date_to: None,
            selected_clients: Vec::new(),
            selected_statuses: Vec::new(),
        }
    }
}

impl FilterParams for DebtorFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(date_from) = self.date_from {
            pairs.push(("dateFrom", date_from.to_string()));
        }
        if let Some(date_to) = self.date_to {
            pairs.push(("dateTo", date_to.to_string()));
        }
        pairs.push(("selectedClients", comma_join(&self.selected_clients)));
        pairs.push((
            "selectedStatuses",
            comma_join(self.selected_statuses.iter().map(|s| s.as_str())),
        ));
        pairs
    }
}

/// The `/debtor` resource
#[derive(Debug, Clone, Copy)]
pub struct Debtors;

impl ResourceSpec for Debtors {
    type Record = Debtor;
    type Filters = DebtorFilters;

    const PATH: &'static str = "/debtor";
    const ENVELOPE: Envelope = Envelope::Wrapped;

    fn record_id(record: &Debtor) -> Option<i64> {
        record.id
    }
}

pub type DebtorGateway = ResourceGateway<Debtors>;
pub type DebtorList = ListController<Debtors>;
