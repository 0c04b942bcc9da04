//! Repository Module
//!
//! Entity store accessors: thin per-entity SQL over a `SqlitePool`.
//! No business rules live here; existence checks belong to the validator.

pub mod category;
pub mod product;

use crate::core::CatalogError;

/// Result type for repository operations
///
/// Accessors only ever produce [`CatalogError::Store`].
pub type RepoResult<T> = Result<T, CatalogError>;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::db::DbService;
    use sqlx::SqlitePool;

    /// Fresh in-memory pool with the catalog schema
    pub async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }
}
