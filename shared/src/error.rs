//! 统一错误码表
//!
//! 跨进程稳定的 API 错误码。服务端 `AppError` 与客户端 `ClientError`
//! 都以这张表为准，避免双方各自硬编码字符串。
//!
//! # 错误码范围
//!
//! - E0xxx: 通用错误 (验证、资源不存在)
//! - E4xxx: 预订业务错误 (时段已满、人数超限)
//! - E9xxx: 系统错误 (存储、内部)

use http::StatusCode;

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Success
    Success,
    /// Validation error (400)
    Validation,
    /// Resource not found (404)
    NotFound,
    /// Slot has no remaining capacity (409)
    SlotFull,
    /// Party size above the auto-booking ceiling (422)
    PartyTooLarge,
    /// Storage error (500)
    Storage,
    /// Internal server error (500)
    Internal,
}

impl ApiErrorCode {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::SlotFull => StatusCode::CONFLICT,
            Self::PartyTooLarge => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Storage => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::Validation => "E0002",
            Self::NotFound => "E0003",
            Self::SlotFull => "E4001",
            Self::PartyTooLarge => "E4002",
            Self::Storage => "E9002",
            Self::Internal => "E9001",
        }
    }

    /// Get the default message for this error
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Validation => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::SlotFull => "Time slot is fully booked",
            Self::PartyTooLarge => "Party too large, please contact the restaurant",
            Self::Storage => "Storage error",
            Self::Internal => "Internal server error",
        }
    }

    /// Parse an error code string back into the enum
    ///
    /// Unknown codes map to `Internal` — 客户端对未知码按系统错误处理。
    pub fn from_code(code: &str) -> Self {
        match code {
            "E0000" => Self::Success,
            "E0002" => Self::Validation,
            "E0003" => Self::NotFound,
            "E4001" => Self::SlotFull,
            "E4002" => Self::PartyTooLarge,
            "E9002" => Self::Storage,
            _ => Self::Internal,
        }
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for code in [
            ApiErrorCode::Success,
            ApiErrorCode::Validation,
            ApiErrorCode::NotFound,
            ApiErrorCode::SlotFull,
            ApiErrorCode::PartyTooLarge,
            ApiErrorCode::Storage,
            ApiErrorCode::Internal,
        ] {
            assert_eq!(ApiErrorCode::from_code(code.code()), code);
        }
    }

    #[test]
    fn unknown_code_is_internal() {
        assert_eq!(ApiErrorCode::from_code("E7777"), ApiErrorCode::Internal);
    }
}
