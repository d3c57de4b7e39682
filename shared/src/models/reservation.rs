//! Reservation Model

use serde::{Deserialize, Serialize};

use super::slot::Slot;

/// 预订状态
///
/// `Pending` 仅存在于引擎处理期间；到达终态后记录不再变更。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Rejected,
}

/// Guest contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Reservation entity (预订记录)
///
/// 由 BookingEngine 在提交时创建，确认后只读。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique id, assigned once at creation
    pub id: String,
    /// The slot this reservation occupies
    pub slot: Slot,
    /// Number of guests (covers) counted against the slot capacity
    pub party_size: u32,
    pub contact: ReservationContact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
    /// Creation timestamp (Unix millis, UTC)
    pub created_at: i64,
}
