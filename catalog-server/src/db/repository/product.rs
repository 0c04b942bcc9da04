//! Product Repository

use super::RepoResult;
use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::SqlitePool;

/// One row of the category ⟕ product join behind the grouped view
///
/// Product columns are `NULL` for a category with no products.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ProductGroupRow {
    pub category_id: String,
    pub category_name: String,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub product_is_active: Option<bool>,
    pub product_quantity: Option<i32>,
    pub product_created_at: Option<i64>,
    pub product_updated_at: Option<i64>,
}

impl ProductGroupRow {
    /// The joined product, if this row carries one
    pub fn product(&self) -> Option<Product> {
        let id = self.product_id.clone()?;
        Some(Product {
            id,
            name: self.product_name.clone().unwrap_or_default(),
            category_id: self.category_id.clone(),
            is_active: self.product_is_active.unwrap_or(true),
            quantity: self.product_quantity.unwrap_or(0),
            created_at: self.product_created_at.unwrap_or(0),
            updated_at: self.product_updated_at.unwrap_or(0),
        })
    }
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, category_id, is_active, quantity, created_at, updated_at FROM product WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(product)
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    let now = shared::util::now_millis();
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO product (id, name, category_id, is_active, quantity, created_at, updated_at) VALUES (?1, ?2, ?3, 1, ?4, ?5, ?5) RETURNING id, name, category_id, is_active, quantity, created_at, updated_at",
    )
    .bind(shared::util::new_id())
    .bind(data.name)
    .bind(data.category_id)
    .bind(data.quantity.unwrap_or(0))
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(product)
}

/// Partial update. Absent fields keep their value, `updated_at` is always refreshed.
///
/// Fails with `sqlx::Error::RowNotFound` if the row no longer exists.
pub async fn update(pool: &SqlitePool, id: &str, data: ProductUpdate) -> RepoResult<Product> {
    let now = shared::util::now_millis();
    let product = sqlx::query_as::<_, Product>(
        "UPDATE product SET name = COALESCE(?1, name), category_id = COALESCE(?2, category_id), is_active = COALESCE(?3, is_active), quantity = COALESCE(?4, quantity), updated_at = ?5 WHERE id = ?6 RETURNING id, name, category_id, is_active, quantity, created_at, updated_at",
    )
    .bind(data.name)
    .bind(data.category_id)
    .bind(data.is_active)
    .bind(data.quantity)
    .bind(now)
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(product)
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM product WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

/// Active products of one category, oldest first
pub async fn find_active_by_category(
    pool: &SqlitePool,
    category_id: &str,
) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, category_id, is_active, quantity, created_at, updated_at FROM product WHERE category_id = ? AND is_active = 1 ORDER BY created_at, id",
    )
    .bind(category_id)
    .fetch_all(pool)
    .await?;
    Ok(products)
}

/// Active categories left-joined to all of their products (active or not),
/// ordered by category id then product id.
pub async fn find_grouped_rows(pool: &SqlitePool) -> RepoResult<Vec<ProductGroupRow>> {
    let rows = sqlx::query_as::<_, ProductGroupRow>(
        r#"
        SELECT c.id AS category_id, c.name AS category_name,
               p.id AS product_id, p.name AS product_name, p.is_active AS product_is_active,
               p.quantity AS product_quantity, p.created_at AS product_created_at,
               p.updated_at AS product_updated_at
        FROM category c
        LEFT JOIN product p ON p.category_id = c.id
        WHERE c.is_active = 1
        ORDER BY c.id, p.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
