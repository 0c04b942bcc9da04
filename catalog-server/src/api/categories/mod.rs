//! Category API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/categories | GET | 活动分类树 (最多 3 层) |
//! | /api/categories | POST | 创建分类 |
//! | /api/categories/active | GET | 同上 |
//! | /api/categories/{id} | GET / PUT / DELETE | 查询 / 更新 / 删除 (级联) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/categories", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_active_tree).post(handler::create))
        // Static segment wins over /{id}
        .route("/active", get(handler::list_active_tree))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
