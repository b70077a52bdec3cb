//! Business logic services.
//!
//! Services hold the logic behind handlers and the auth gate, separate from
//! HTTP concerns.

pub mod user_service;
