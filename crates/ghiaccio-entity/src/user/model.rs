//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user of the ice-delivery service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// First name.
    pub name: String,
    /// Last name.
    pub surname: String,
    /// Italian mobile number (unique, `3` followed by nine digits).
    pub phone_number: String,
    /// Email address (unique).
    pub email: String,
    /// Hex-encoded scrypt derived key.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Hex-encoded per-user random salt.
    #[serde(skip_serializing)]
    pub salt: String,
    /// User role.
    pub role: UserRole,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// First name.
    pub name: String,
    /// Last name.
    pub surname: String,
    /// Mobile number.
    pub phone_number: String,
    /// Email address.
    pub email: String,
    /// Pre-derived password key (hex).
    pub password_hash: String,
    /// Salt used for the derivation (hex).
    pub salt: String,
    /// Assigned role.
    pub role: UserRole,
}
