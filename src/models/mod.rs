//! Data models representing database entities.

/// User identity model
pub mod user;
