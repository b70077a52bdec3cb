//! User service - identity resolution and user creation.
//!
//! API keys are 32 random bytes, hex-encoded. Only the SHA-256 hash of a key
//! is persisted; resolving a presented key means hashing it and looking the
//! hash up.

use std::future::Future;

use sha2::{Digest, Sha256};

use crate::{db::DbPool, error::AppError, models::user::User};

/// Why an API key could not be resolved to a user.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no user matches the given api key")]
    NotFound,

    #[error("user lookup failed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Resolves an API key to the user that owns it.
///
/// Implementations may perform I/O. Dropping the returned future abandons
/// the lookup; no timeout is imposed by callers.
pub trait UserResolver: Send + Sync + 'static {
    fn user_by_api_key(
        &self,
        api_key: &str,
    ) -> impl Future<Output = Result<User, LookupError>> + Send;
}

/// SHA-256 hex digest of an API key, as stored in `users.api_key_hash`.
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generate a fresh 64-character hex API key.
pub fn generate_api_key() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

/// Postgres-backed [`UserResolver`].
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl UserResolver for PgUserStore {
    async fn user_by_api_key(&self, api_key: &str) -> Result<User, LookupError> {
        let key_hash = hash_api_key(api_key);

        sqlx::query_as::<_, User>(
            "SELECT id, name, created_at, updated_at
             FROM users
             WHERE api_key_hash = $1",
        )
        .bind(&key_hash)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(LookupError::NotFound)
    }
}

/// Create a user and return it together with its plaintext API key.
///
/// # Errors
///
/// - `InvalidRequest`: name is empty or whitespace
/// - `Database`: insert failed
pub async fn create_user(pool: &DbPool, name: &str) -> Result<(User, String), AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidRequest("Name must not be empty".to_string()));
    }

    let api_key = generate_api_key();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, api_key_hash)
        VALUES ($1, $2)
        RETURNING id, name, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(hash_api_key(&api_key))
    .fetch_one(pool)
    .await?;

    tracing::info!(user_id = %user.id, "user created");

    Ok((user, api_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_hex_sha256() {
        assert_eq!(
            hash_api_key("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn generated_keys_are_64_hex_chars_and_unique() {
        let a = generate_api_key();
        let b = generate_api_key();

        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_touching_the_database() {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();

        let result = create_user(&pool, "   ").await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }
}
