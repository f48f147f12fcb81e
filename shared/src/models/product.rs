//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unit in which a loan term is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TermType {
    Day,
    Month,
}

/// Loan product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub is_active: bool,
    /// Smallest sum that can be issued
    #[serde(with = "rust_decimal::serde::float")]
    pub min_sum: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max_sum: Decimal,
    /// Interest rate bounds in percent
    pub min_interest_rate: f64,
    pub max_interest_rate: f64,
    /// Term bounds, in units of `term_type`
    pub min_term: u32,
    pub max_term: u32,
    pub term_type: TermType,
}
