//! 统一错误处理
//!
//! 提供应用级错误类型和响应辅助：
//! - [`AppError`] - 应用错误枚举，`IntoResponse` 产出统一信封
//! - [`ok`] - 成功响应
//!
//! 错误码与 HTTP 状态由 [`shared::error::ApiErrorCode`] 统一定义，
//! 服务端与客户端共享同一张码表。
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Reservation r-1 not found"))
//!
//! // 返回成功响应
//! Ok(ok(data))
//! ```

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::{ApiErrorCode, ApiResponse};
use tracing::error;

/// 应用错误枚举
///
/// | 分类 | 说明 |
/// |------|------|
/// | 业务逻辑错误 | 验证失败、资源不存在、时段已满、人数超限 |
/// | 系统错误 | 存储错误、内部错误 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Slot is fully booked: {0}")]
    /// 时段已满 (409) — 并发抢占的预期结果，不是系统故障
    SlotFull(String),

    #[error("Party too large")]
    /// 人数超出自动预订上限 (422)，应走人工联系
    PartyTooLarge,

    // ========== 系统错误 (5xx) ==========
    #[error("Storage error: {0}")]
    /// 存储错误 (500)
    Storage(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    fn error_code(&self) -> ApiErrorCode {
        match self {
            Self::Validation(_) => ApiErrorCode::Validation,
            Self::NotFound(_) => ApiErrorCode::NotFound,
            Self::SlotFull(_) => ApiErrorCode::SlotFull,
            Self::PartyTooLarge => ApiErrorCode::PartyTooLarge,
            Self::Storage(_) => ApiErrorCode::Storage,
            Self::Internal(_) => ApiErrorCode::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.error_code();

        let message = match &self {
            // 5xx: 记录细节但不对外暴露
            AppError::Storage(msg) => {
                error!(target: "storage", error = %msg, "Storage error occurred");
                code.default_message().to_string()
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                code.default_message().to_string()
            }
            AppError::Validation(msg) | AppError::NotFound(msg) | AppError::SlotFull(msg) => {
                msg.clone()
            }
            AppError::PartyTooLarge => code.default_message().to_string(),
        };

        let body = Json(ApiResponse::<()>::error(code.code(), message));
        (code.status_code(), body).into_response()
    }
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}
