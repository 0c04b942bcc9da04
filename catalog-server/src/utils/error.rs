//! 统一错误处理
//!
//! Re-exports the shared error system and maps engine failures
//! ([`CatalogError`]) onto it at the HTTP boundary.
//!
//! | CatalogError | ErrorCode | HTTP |
//! |--------------|-----------|------|
//! | NotFound(Category) | CategoryNotFound | 404 |
//! | NotFound(Product) | ProductNotFound | 404 |
//! | Validation | ValidationFailed | 400 |
//! | Store (read) | DatabaseError | 500 |
//! | Store (write, via [`write_error`]) | InvalidRequest | 400 |

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};

use crate::core::{CatalogError, EntityKind};

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { kind, id } => {
                let code = match kind {
                    EntityKind::Category => ErrorCode::CategoryNotFound,
                    EntityKind::Product => ErrorCode::ProductNotFound,
                };
                AppError::new(code).with_detail("id", id)
            }
            CatalogError::Validation(msg) => AppError::validation(msg),
            CatalogError::Store(e) => {
                tracing::error!(target: "database", error = %e, "Database error occurred");
                AppError::database("Database error")
            }
        }
    }
}

/// Map a failure on a write path
///
/// Store failures become a generic "Error <action>" bad request, so a write
/// racing a concurrent delete is not misreported as a stale not-found.
pub fn write_error(err: CatalogError, action: &str) -> AppError {
    match err {
        CatalogError::Store(e) => {
            tracing::warn!(error = %e, "Error {action}");
            AppError::invalid_request(format!("Error {action}"))
        }
        other => other.into(),
    }
}
