//! Client request payloads
//!
//! 日期与时刻以原始字符串进入，由服务端在 handler/engine 层解析并验证，
//! 保证格式错误走统一的 validation 错误路径而不是反序列化失败。

use serde::{Deserialize, Serialize};

/// Reservation submission payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// ISO date string, `YYYY-MM-DD`
    pub date: String,
    /// Time string, `HH:MM`
    pub time: String,
    /// Number of guests
    pub party_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Contact form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}
