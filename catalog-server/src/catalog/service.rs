//! Catalog Facade
//!
//! Composes validator, repositories, tree builder and grouping aggregator
//! into the operations exposed to the HTTP layer. Holds only the pool: every
//! call re-derives its result from the current store contents.

use crate::catalog::{TREE_DEPTH, build_tree, group_by_category, validator};
use crate::core::CatalogResult;
use crate::db::repository::{category, product};
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};
use shared::models::{
    Category, CategoryCreate, CategoryNode, CategoryProducts, CategoryUpdate, Product,
    ProductCreate, ProductUpdate,
};
use sqlx::SqlitePool;

#[derive(Clone, Debug)]
pub struct CatalogService {
    pool: SqlitePool,
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ── Categories ──────────────────────────────────────────────

    pub async fn create_category(&self, data: CategoryCreate) -> CatalogResult<Category> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validator::validate_parent_exists(&self.pool, data.parent_id.as_deref()).await?;

        let created = category::create(&self.pool, data).await?;
        tracing::debug!(id = %created.id, parent_id = ?created.parent_id, "Category created");
        Ok(created)
    }

    pub async fn update_category(&self, id: &str, data: CategoryUpdate) -> CatalogResult<Category> {
        validate_optional_text(&data.name, "name", MAX_NAME_LEN)?;
        validator::validate_category_exists(&self.pool, id).await?;
        // Some(None) detaches to root and needs no lookup
        if let Some(Some(parent_id)) = &data.parent_id {
            validator::validate_parent_exists(&self.pool, Some(parent_id.as_str())).await?;
        }

        let updated = category::update(&self.pool, id, data).await?;
        tracing::debug!(id = %updated.id, parent_id = ?updated.parent_id, "Category updated");
        Ok(updated)
    }

    /// Delete a category; descendants and their products cascade in the store
    pub async fn delete_category(&self, id: &str) -> CatalogResult<()> {
        validator::validate_category_exists(&self.pool, id).await?;

        let rows = category::delete(&self.pool, id).await?;
        if rows == 0 {
            tracing::warn!(id = %id, "Category vanished before delete");
        } else {
            tracing::debug!(id = %id, "Category deleted");
        }
        Ok(())
    }

    pub async fn find_category(&self, id: &str) -> CatalogResult<Category> {
        validator::validate_category_exists(&self.pool, id).await
    }

    /// Forest of active categories, at most [`TREE_DEPTH`] levels deep
    pub async fn list_active_category_tree(&self) -> CatalogResult<Vec<CategoryNode>> {
        let rows = category::find_active_tree_rows(&self.pool, TREE_DEPTH as i64).await?;
        Ok(build_tree(rows, TREE_DEPTH))
    }

    // ── Products ────────────────────────────────────────────────

    pub async fn create_product(&self, data: ProductCreate) -> CatalogResult<Product> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validator::validate_category_exists(&self.pool, &data.category_id).await?;

        let created = product::create(&self.pool, data).await?;
        tracing::debug!(id = %created.id, category_id = %created.category_id, "Product created");
        Ok(created)
    }

    pub async fn update_product(&self, id: &str, data: ProductUpdate) -> CatalogResult<Product> {
        validate_optional_text(&data.name, "name", MAX_NAME_LEN)?;
        validator::validate_product_exists(&self.pool, id).await?;
        if let Some(category_id) = &data.category_id {
            validator::validate_category_exists(&self.pool, category_id).await?;
        }

        let updated = product::update(&self.pool, id, data).await?;
        tracing::debug!(id = %updated.id, category_id = %updated.category_id, "Product updated");
        Ok(updated)
    }

    pub async fn delete_product(&self, id: &str) -> CatalogResult<()> {
        validator::validate_product_exists(&self.pool, id).await?;

        let rows = product::delete(&self.pool, id).await?;
        if rows == 0 {
            tracing::warn!(id = %id, "Product vanished before delete");
        } else {
            tracing::debug!(id = %id, "Product deleted");
        }
        Ok(())
    }

    pub async fn find_product(&self, id: &str) -> CatalogResult<Product> {
        validator::validate_product_exists(&self.pool, id).await
    }

    /// Active products of a category; `NotFound(Category)` distinguishes
    /// an unknown category from an empty one
    pub async fn list_active_products_by_category(
        &self,
        category_id: &str,
    ) -> CatalogResult<Vec<Product>> {
        validator::validate_category_exists(&self.pool, category_id).await?;
        product::find_active_by_category(&self.pool, category_id).await
    }

    /// One record per active category with all of its products
    pub async fn list_products_grouped_by_category(&self) -> CatalogResult<Vec<CategoryProducts>> {
        let rows = product::find_grouped_rows(&self.pool).await?;
        Ok(group_by_category(rows))
    }
}
