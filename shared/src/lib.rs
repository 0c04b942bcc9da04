//! Shared types for the catalog service
//!
//! Common types used by the server crate and its clients: data models,
//! error codes, response structures and small utilities.

pub mod error;
pub mod models;
pub mod util;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};
