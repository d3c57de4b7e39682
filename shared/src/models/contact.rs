//! Contact Message Model

use serde::{Deserialize, Serialize};

/// Stored contact message (联系消息)
///
/// Fire-and-forget: 入库即完成，不触发任何投递。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Creation timestamp (Unix millis, UTC)
    pub created_at: i64,
}
