//! Domain records served by the backend REST API

pub mod cargo;
pub mod client;
pub mod debtor;
pub mod product;
pub mod user;

pub use cargo::Cargo;
pub use client::Client;
pub use debtor::{Debtor, DebtorStatus};
pub use product::{Product, TermType};
pub use user::{User, UserRole};
