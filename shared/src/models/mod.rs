//! Data models
//!
//! Shared between catalog-server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are UUID v4 strings generated by the server on insert.

pub mod category;
pub mod product;
pub mod serde_helpers;

// Re-exports
pub use category::*;
pub use product::*;
