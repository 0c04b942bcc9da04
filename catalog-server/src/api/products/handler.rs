//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::utils::{AppResult, write_error};
use shared::models::{CategoryProducts, Product, ProductCreate, ProductUpdate};

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state
        .catalog
        .create_product(payload)
        .await
        .map_err(|e| write_error(e, "creating product"))?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/:id - 更新商品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let product = state
        .catalog
        .update_product(&id, payload)
        .await
        .map_err(|e| write_error(e, "updating product"))?;
    Ok(Json(product))
}

/// DELETE /api/products/:id - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .catalog
        .delete_product(&id)
        .await
        .map_err(|e| write_error(e, "deleting product"))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.find_product(&id).await?;
    Ok(Json(product))
}

/// GET /api/products/category/:category_id - 分类下的活动商品
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state
        .catalog
        .list_active_products_by_category(&category_id)
        .await?;
    Ok(Json(products))
}

/// GET /api/products/grouped - 按分类分组的商品
pub async fn list_grouped(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<CategoryProducts>>> {
    let groups = state.catalog.list_products_grouped_by_category().await?;
    Ok(Json(groups))
}
