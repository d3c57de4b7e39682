//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (错误码来自 shared::error)
//! - [`ok`] - 成功响应信封
//! - 日志、时间解析、输入验证工具

pub mod error;
pub mod logger;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResult, ok};
