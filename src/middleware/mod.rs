//! HTTP middleware components.
//!
//! Middleware run before route handlers and may short-circuit a request,
//! answering it themselves instead of calling the handler.

/// API key parsing from the `Authorization` header
pub mod api_key;
/// Authentication gate for handlers that need a user
pub mod auth;
