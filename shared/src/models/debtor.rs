//! Debtor Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Client;

/// Debtor account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtorStatus {
    Active,
    Overdue,
    Paid,
    Legal,
}

impl DebtorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtorStatus::Active => "ACTIVE",
            DebtorStatus::Overdue => "OVERDUE",
            DebtorStatus::Paid => "PAID",
            DebtorStatus::Legal => "LEGAL",
        }
    }
}

/// Debtor entity
///
/// `client` is an embedded snapshot taken at registration time, not a live
/// reference; updating the client record does not rewrite existing debtors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debtor {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    /// Outstanding debt
    #[serde(with = "rust_decimal::serde::float")]
    pub debt: Decimal,
    /// Current balance
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    /// Amount at registration
    #[serde(with = "rust_decimal::serde::float")]
    pub registration_amount: Decimal,
    pub product_description: String,
    pub note: String,
    pub status: DebtorStatus,
    pub client: Client,
}
