//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`availability`] - 可订时段查询
//! - [`reservations`] - 预订提交与查询
//! - [`menu`] - 菜单
//! - [`reviews`] - 顾客评价
//! - [`store_info`] - 门店信息
//! - [`contact`] - 联系表单
//!
//! 所有响应使用统一信封 `{code, message, data}`，
//! 错误码表见 [`shared::error::ApiErrorCode`]。

pub mod availability;
pub mod contact;
pub mod health;
pub mod menu;
pub mod reservations;
pub mod reviews;
pub mod store_info;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult, ok};
