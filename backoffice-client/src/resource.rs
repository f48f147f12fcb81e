//! Per-resource contract
//!
//! Each REST resource is described by a zero-sized [`ResourceSpec`] type:
//! endpoint path, record and filter types, which envelope the backend uses,
//! and how to read a record's identifier. The gateway and the list
//! controller are generic over this trait; nothing else in the crate knows
//! one resource from another.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// How a resource's responses are shaped
///
/// Most endpoints nest their payload under a `result` key; the product
/// endpoints return it at the response root and their mutations return the
/// raw record. The difference is part of each resource's backend contract,
/// not something to paper over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `{ "result": ... }`
    Wrapped,
    /// Payload at the response root
    Bare,
}

/// Filter state serializable as request query parameters
pub trait FilterParams {
    /// Query pairs for the current filter state
    ///
    /// Unset fields are omitted from the request entirely. Array-valued
    /// filters are serialized as comma-joined lists.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Static description of one backend REST resource
pub trait ResourceSpec: Send + Sync + 'static {
    /// Record exchanged with the backend
    type Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Filter set accepted by the list endpoint
    type Filters: FilterParams + Default + Clone + Send + Sync + 'static;

    /// Endpoint path relative to the API base, e.g. `"/debtor"`
    const PATH: &'static str;

    /// Response envelope convention of this resource
    const ENVELOPE: Envelope;

    /// Server-assigned identifier of a record, if it has one yet
    fn record_id(record: &Self::Record) -> Option<i64>;
}

/// Join values with commas for array-valued filter parameters
pub fn comma_join<I, T>(values: I) -> String
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
