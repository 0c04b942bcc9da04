//! Integrity Validator
//!
//! Existence checks run before any mutation reaches the store. Lookups only,
//! no writes; every failure precedes the write it guards.

use crate::core::{CatalogError, CatalogResult};
use crate::db::repository::{category, product};
use shared::models::{Category, Product};
use sqlx::SqlitePool;

/// No-op when `parent_id` is absent, `NotFound(Category)` when it does not resolve
pub async fn validate_parent_exists(pool: &SqlitePool, parent_id: Option<&str>) -> CatalogResult<()> {
    if let Some(parent_id) = parent_id {
        validate_category_exists(pool, parent_id).await?;
    }
    Ok(())
}

/// Returns the category so callers that need the row skip a second lookup
pub async fn validate_category_exists(pool: &SqlitePool, id: &str) -> CatalogResult<Category> {
    category::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CatalogError::category_not_found(id))
}

pub async fn validate_product_exists(pool: &SqlitePool, id: &str) -> CatalogResult<Product> {
    product::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CatalogError::product_not_found(id))
}
