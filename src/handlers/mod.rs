//! HTTP request handlers (route handlers).

/// Liveness and database connectivity
pub mod health;
/// User signup and lookup endpoints
pub mod users;
