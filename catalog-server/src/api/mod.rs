//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`categories`] - 分类管理接口
//! - [`products`] - 商品管理接口

pub mod categories;
pub mod health;
pub mod products;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health API - public route
        .merge(health::router())
        // Catalog APIs
        .merge(categories::router())
        .merge(products::router())
}

/// Build a fully configured application with middleware and state
///
/// Used by both the HTTP server and oneshot calls in tests
pub fn build_app(state: ServerState) -> Router {
    let timeout = state.config.request_timeout();
    build_router()
        .with_state(state)
        // Request timeout - HTTP layer only, the engine adds none
        .layer(TimeoutLayer::new(timeout))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}
