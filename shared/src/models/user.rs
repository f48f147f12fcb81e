//! User Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role granted to a dashboard user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_MODERATOR")]
    Moderator,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub fullname: String,
    #[validate(email)]
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub active: bool,
    /// Write-only credential; never echoed back by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
