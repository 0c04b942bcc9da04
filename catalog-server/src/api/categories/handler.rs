//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::utils::{AppResult, write_error};
use shared::models::{Category, CategoryCreate, CategoryNode, CategoryUpdate};

/// POST /api/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = state
        .catalog
        .create_category(payload)
        .await
        .map_err(|e| write_error(e, "creating category"))?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/:id - 更新分类
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    let category = state
        .catalog
        .update_category(&id, payload)
        .await
        .map_err(|e| write_error(e, "updating category"))?;
    Ok(Json(category))
}

/// DELETE /api/categories/:id - 删除分类 (子分类和商品级联删除)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .catalog
        .delete_category(&id)
        .await
        .map_err(|e| write_error(e, "deleting category"))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/categories/active - 活动分类树
pub async fn list_active_tree(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<CategoryNode>>> {
    let tree = state.catalog.list_active_category_tree().await?;
    Ok(Json(tree))
}

/// GET /api/categories/:id - 获取单个分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let category = state.catalog.find_category(&id).await?;
    Ok(Json(category))
}
