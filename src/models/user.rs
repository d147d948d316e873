//! Staff user model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{AccessLevel, UserRole};

/// Staff user from database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: String,
    pub role: UserRole,
    pub access_level: AccessLevel,
    pub active: bool,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create user request, as received from the shell. Normalized and hashed
/// before persisting.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
    pub access_level: Option<AccessLevel>,
}

/// Normalized user record, ready to insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub role: UserRole,
    pub access_level: AccessLevel,
}
