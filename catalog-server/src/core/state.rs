use crate::catalog::CatalogService;
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 克隆成本极低 (连接池内部是 Arc)。引擎本身无进程内状态，
/// 每次调用都从数据库重新推导结果。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | catalog | CatalogService | 分类/商品门面 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
    /// 分类/商品门面
    pub catalog: CatalogService,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: DbService) -> Self {
        let catalog = CatalogService::new(db.pool.clone());
        Self {
            config,
            db,
            catalog,
        }
    }

    /// 打开数据库、执行迁移并构造状态
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path)
            .await
            .map_err(|e| ServerError::Database(e.message))?;
        Ok(Self::new(config.clone(), db))
    }

    /// 使用内存数据库构造状态 (测试用)
    pub async fn in_memory(config: Config) -> Result<Self> {
        let db = DbService::in_memory()
            .await
            .map_err(|e| ServerError::Database(e.message))?;
        Ok(Self::new(config, db))
    }
}
