//! Category Repository

use super::RepoResult;
use shared::models::{Category, CategoryCreate, CategoryTreeRow, CategoryUpdate};
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, name, parent_id, is_active, created_at, updated_at FROM category WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

pub async fn create(pool: &SqlitePool, data: CategoryCreate) -> RepoResult<Category> {
    let now = shared::util::now_millis();
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO category (id, name, parent_id, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, 1, ?4, ?4) RETURNING id, name, parent_id, is_active, created_at, updated_at",
    )
    .bind(shared::util::new_id())
    .bind(data.name)
    .bind(data.parent_id)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(category)
}

/// Partial update. Absent fields keep their value, `updated_at` is always refreshed.
///
/// Fails with `sqlx::Error::RowNotFound` if the row no longer exists.
pub async fn update(pool: &SqlitePool, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
    let now = shared::util::now_millis();
    let set_parent = data.parent_id.is_some();
    let category = sqlx::query_as::<_, Category>(
        "UPDATE category SET name = COALESCE(?1, name), parent_id = CASE WHEN ?2 THEN ?3 ELSE parent_id END, is_active = COALESCE(?4, is_active), updated_at = ?5 WHERE id = ?6 RETURNING id, name, parent_id, is_active, created_at, updated_at",
    )
    .bind(data.name)
    .bind(set_parent)
    .bind(data.parent_id.flatten())
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(category)
}

/// Hard delete. Descendant categories and their products go with it
/// through the `ON DELETE CASCADE` foreign keys.
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<u64> {
    let rows = sqlx::query("DELETE FROM category WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected())
}

/// Active categories reachable from an active root within `depth` levels,
/// each with its count of active products.
///
/// Rows come parent-first (`parent_id NULLS FIRST`), then by id.
pub async fn find_active_tree_rows(pool: &SqlitePool, depth: i64) -> RepoResult<Vec<CategoryTreeRow>> {
    let rows = sqlx::query_as::<_, CategoryTreeRow>(
        r#"
        WITH RECURSIVE category_tree AS (
            SELECT id, name, parent_id, is_active, created_at, updated_at, 1 AS level
            FROM category
            WHERE parent_id IS NULL AND is_active = 1

            UNION ALL

            SELECT c.id, c.name, c.parent_id, c.is_active, c.created_at, c.updated_at, ct.level + 1
            FROM category c
            JOIN category_tree ct ON c.parent_id = ct.id
            WHERE ct.level < ?1 AND c.is_active = 1
        ),
        products_count AS (
            SELECT category_id, COUNT(*) AS product_count
            FROM product
            WHERE is_active = 1
            GROUP BY category_id
        )
        SELECT ct.id, ct.name, ct.parent_id, ct.is_active, ct.created_at, ct.updated_at,
               COALESCE(pc.product_count, 0) AS product_count
        FROM category_tree ct
        LEFT JOIN products_count pc ON ct.id = pc.category_id
        ORDER BY ct.parent_id NULLS FIRST, ct.id
        "#,
    )
    .bind(depth)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::test_pool;

    async fn insert(pool: &SqlitePool, name: &str, parent_id: Option<&str>) -> Category {
        create(
            pool,
            CategoryCreate {
                name: name.to_string(),
                parent_id: parent_id.map(str::to_string),
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_pool().await;
        let root = insert(&pool, "Electronics", None).await;
        assert!(root.is_active);
        assert!(root.parent_id.is_none());
        assert_eq!(root.created_at, root.updated_at);

        let found = find_by_id(&pool, &root.id).await.unwrap().unwrap();
        assert_eq!(found, root);
        assert!(find_by_id(&pool, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_with_unknown_parent_violates_fk() {
        let pool = test_pool().await;
        let result = create(
            &pool,
            CategoryCreate {
                name: "Orphan".into(),
                parent_id: Some("missing".into()),
            },
        )
        .await;
        assert!(matches!(result, Err(crate::core::CatalogError::Store(_))));
    }

    #[tokio::test]
    async fn test_update_partial_fields() {
        let pool = test_pool().await;
        let root = insert(&pool, "Electronics", None).await;
        let child = insert(&pool, "Phones", Some(&root.id)).await;

        // name only: parent untouched
        let updated = update(
            &pool,
            &child.id,
            CategoryUpdate {
                name: Some("Mobile".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "Mobile");
        assert_eq!(updated.parent_id.as_deref(), Some(root.id.as_str()));
        assert!(updated.is_active);

        // explicit null: detach to root
        let detached = update(
            &pool,
            &child.id,
            CategoryUpdate {
                parent_id: Some(None),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(detached.name, "Mobile");
        assert!(detached.parent_id.is_none());
        assert!(!detached.is_active);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let pool = test_pool().await;
        let result = update(&pool, "missing", CategoryUpdate::default()).await;
        assert!(matches!(
            result,
            Err(crate::core::CatalogError::Store(sqlx::Error::RowNotFound))
        ));
    }

    #[tokio::test]
    async fn test_delete_cascades_to_descendants() {
        let pool = test_pool().await;
        let root = insert(&pool, "Electronics", None).await;
        let child = insert(&pool, "Phones", Some(&root.id)).await;
        let grandchild = insert(&pool, "Android", Some(&child.id)).await;

        assert_eq!(delete(&pool, &root.id).await.unwrap(), 1);
        assert!(find_by_id(&pool, &child.id).await.unwrap().is_none());
        assert!(find_by_id(&pool, &grandchild.id).await.unwrap().is_none());
        assert_eq!(delete(&pool, &root.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_tree_rows_depth_and_order() {
        let pool = test_pool().await;
        let l1 = insert(&pool, "L1", None).await;
        let l2 = insert(&pool, "L2", Some(&l1.id)).await;
        let l3 = insert(&pool, "L3", Some(&l2.id)).await;
        let l4 = insert(&pool, "L4", Some(&l3.id)).await;

        let rows = find_active_tree_rows(&pool, 3).await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.category.id.as_str()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(ids[0], l1.id);
        assert!(ids.contains(&l2.id.as_str()));
        assert!(ids.contains(&l3.id.as_str()));
        assert!(!ids.contains(&l4.id.as_str()));
    }

    #[tokio::test]
    async fn test_tree_rows_skip_inactive() {
        let pool = test_pool().await;
        let root = insert(&pool, "Root", None).await;
        let hidden = insert(&pool, "Hidden", Some(&root.id)).await;
        insert(&pool, "Below hidden", Some(&hidden.id)).await;
        update(
            &pool,
            &hidden.id,
            CategoryUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let rows = find_active_tree_rows(&pool, 3).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category.id, root.id);
        assert_eq!(rows[0].product_count, 0);
    }
}
