//! Catalog Server - 分类层级与商品目录服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SQLite (sqlx) 连接池、迁移和各实体的 repository
//! - **目录引擎** (`catalog`): 完整性校验、分类树构建、商品分组聚合、门面
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── db/            # 数据库层 (repository)
//! ├── catalog/       # validator / tree / grouping / service
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、校验、错误映射
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use catalog::CatalogService;
pub use crate::core::{CatalogError, CatalogResult, Config, EntityKind, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ErrorCategory, ErrorCode, ErrorResponse};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 加载 `.env`、读取配置并初始化日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#
    );
}
