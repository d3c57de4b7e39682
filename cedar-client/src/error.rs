//! Client error types

use shared::ApiErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server returned a business error (统一信封里的非成功码)
    #[error("[{}] {message}", code.code())]
    Api {
        code: ApiErrorCode,
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// 时段已满 — 预期的竞争结果，应重新查询可订性后换时段
    pub fn is_slot_full(&self) -> bool {
        matches!(
            self,
            Self::Api {
                code: ApiErrorCode::SlotFull,
                ..
            }
        )
    }

    /// 人数超出自动预订上限，应展示人工联系方式
    pub fn is_party_too_large(&self) -> bool {
        matches!(
            self,
            Self::Api {
                code: ApiErrorCode::PartyTooLarge,
                ..
            }
        )
    }

    /// 面向用户的提示文案
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(_) => "Network error, please try again".to_string(),
            Self::InvalidResponse(_) | Self::Serialization(_) => {
                "Unexpected server response, please try again".to_string()
            }
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
