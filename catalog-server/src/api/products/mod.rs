//! Product API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/products | POST | 创建商品 |
//! | /api/products/grouped | GET | 按分类分组 |
//! | /api/products/category/{category_id} | GET | 分类下的活动商品 |
//! | /api/products/{id} | GET / PUT / DELETE | 查询 / 更新 / 删除 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/grouped", get(handler::list_grouped))
        .route("/category/{category_id}", get(handler::list_by_category))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
