//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ErrorResponse`] - 错误响应结构 (from shared::error)
//! - [`write_error`] - 写操作的错误映射
//! - 日志、输入校验

pub mod error;
pub mod logger;
pub mod validation;

// Re-export error types from the error module (which re-exports from shared)
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};
pub use error::write_error;
