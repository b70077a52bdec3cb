//! User model and the request/response bodies of the user endpoints.
//!
//! A user is the identity an API key resolves to. The key itself is never
//! stored; only its SHA-256 hash lives in the `users` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record as read from the `users` table.
///
/// This is the identity the auth gate hands to protected handlers. The key
/// hash column is deliberately not selected into this type.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct User {
    /// Unique identifier for this user
    pub id: Uuid,

    /// Display name chosen at signup
    pub name: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a user.
///
/// ```json
/// { "name": "alice" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Response body returned once, on user creation.
///
/// `api_key` is the only time the plaintext key leaves the server.
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    #[serde(flatten)]
    pub user: User,

    /// 64-character hex API key, to be sent as `Authorization: ApiKey <key>`
    pub api_key: String,
}
