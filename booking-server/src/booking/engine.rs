//! BookingEngine - 预订提交流水线
//!
//! 每次提交走 `Received → Validated → CapacityReserved → Persisted`，
//! 任一阶段失败都退出到 `Rejected(原因)`：
//!
//! 1. **Validate**: 日期不早于今天且开放；时刻必须出现在重新推导的
//!    可订列表中 (不信任客户端)；人数在 [1, 上限]；联系方式合法。
//! 2. **Reserve**: `try_reserve` 原子占用容量。`Full` 是两笔提交抢
//!    最后几个客位时的预期结果，不按系统错误处理。
//! 3. **Persist**: 写入预订记录。写入失败时 `release` 回滚容量，
//!    绝不泄漏占用。
//!
//! 引擎不做自动重试: `SlotFull` 之后该时段已被证明耗尽或竞争激烈，
//! 调用方必须重新查询可订性后换时段再试。

use std::sync::Arc;

use chrono::Utc;
use chrono_tz::Tz;
use shared::models::{Reservation, ReservationContact, ReservationStatus, Slot};
use shared::request::ReservationRequest;

use crate::utils::time::{parse_date, parse_time, today_in_tz};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_email, validate_optional_text, validate_phone,
    validate_required_text,
};

use super::availability::AvailabilityResolver;
use super::capacity::{ReserveOutcome, SlotCapacityStore};
use super::storage::ReservationStore;

/// 提交被拒绝的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// 输入验证失败 (字段错误、闭店日期、时刻不在可订列表)
    Validation(String),
    /// 人数超出自动预订上限，应走人工联系
    PartyTooLarge,
    /// 容量在提交瞬间被抢完 — 预期的竞争结果
    SlotFull,
    /// 持久化失败 (容量已回滚)
    Storage,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation: {msg}"),
            Self::PartyTooLarge => write!(f, "party too large"),
            Self::SlotFull => write!(f, "slot full"),
            Self::Storage => write!(f, "storage failure"),
        }
    }
}

/// 预订引擎 - CapacityRecord 变更与 Reservation 创建的唯一归属者
pub struct BookingEngine {
    capacity: Arc<SlotCapacityStore>,
    resolver: Arc<AvailabilityResolver>,
    storage: ReservationStore,
    max_covers: u32,
    max_party_size: u32,
    tz: Tz,
}

impl BookingEngine {
    pub fn new(
        capacity: Arc<SlotCapacityStore>,
        resolver: Arc<AvailabilityResolver>,
        storage: ReservationStore,
        max_covers: u32,
        max_party_size: u32,
        tz: Tz,
    ) -> Self {
        Self {
            capacity,
            resolver,
            storage,
            max_covers,
            max_party_size,
            tz,
        }
    }

    /// 启动时从已持久化的预订重建容量账目
    ///
    /// 只回放今天及以后的记录，过去的时段不再参与容量判定。
    pub fn rebuild_capacity(&self) -> Result<usize, super::StorageError> {
        let today = today_in_tz(self.tz);
        let upcoming = self.storage.reservations_on_or_after(today)?;
        let count = upcoming.len();
        for reservation in &upcoming {
            self.capacity.seed(&reservation.slot, reservation.party_size);
        }
        tracing::info!(reservations = count, "Capacity ledger rebuilt from storage");
        Ok(count)
    }

    /// 提交一笔预订
    ///
    /// 返回确认的预订记录，或拒绝原因。无自动重试。
    pub fn submit(&self, request: &ReservationRequest) -> Result<Reservation, RejectReason> {
        // 1. Validate
        let slot = self.validate(request)?;

        // 2. Reserve capacity — 唯一的同步变更点
        match self
            .capacity
            .try_reserve(&slot, request.party_size, self.max_covers)
        {
            ReserveOutcome::Reserved => {}
            ReserveOutcome::Full => {
                tracing::info!(slot = %slot, party_size = request.party_size, "Slot full");
                return Err(RejectReason::SlotFull);
            }
        }

        // 3. Persist
        let reservation = Reservation {
            id: uuid::Uuid::new_v4().to_string(),
            slot: slot.clone(),
            party_size: request.party_size,
            contact: ReservationContact {
                name: request.name.trim().to_string(),
                email: request.email.trim().to_string(),
                phone: request.phone.trim().to_string(),
            },
            special_requests: request
                .special_requests
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            status: ReservationStatus::Confirmed,
            created_at: Utc::now().timestamp_millis(),
        };

        if let Err(e) = self.storage.insert_reservation(&reservation) {
            // 回滚已占用的容量，避免泄漏
            self.capacity.release(&slot, request.party_size);
            tracing::error!(slot = %slot, error = %e, "Persist failed, capacity released");
            return Err(RejectReason::Storage);
        }

        tracing::info!(
            id = %reservation.id,
            slot = %slot,
            party_size = reservation.party_size,
            "Reservation confirmed"
        );
        Ok(reservation)
    }

    /// 验证请求并定位目标时段
    ///
    /// 时刻合法性从 AvailabilityResolver 重新推导，
    /// 即使客户端绕过 UI 也无法预订闭店日期。
    fn validate(&self, request: &ReservationRequest) -> Result<Slot, RejectReason> {
        let map = |e: crate::utils::AppError| RejectReason::Validation(e.to_string());

        validate_required_text(&request.name, "name", MAX_NAME_LEN).map_err(map)?;
        validate_email(&request.email).map_err(map)?;
        validate_phone(&request.phone).map_err(map)?;
        validate_optional_text(&request.special_requests, "special_requests", MAX_NOTE_LEN)
            .map_err(map)?;

        if request.party_size == 0 {
            return Err(RejectReason::Validation(
                "party_size must be at least 1".to_string(),
            ));
        }
        if request.party_size > self.max_party_size {
            return Err(RejectReason::PartyTooLarge);
        }

        let date = parse_date(&request.date).map_err(map)?;
        let time = parse_time(&request.time).map_err(map)?;

        let today = today_in_tz(self.tz);
        let view = self.resolver.available_times(date, today);
        if !view.open {
            return Err(RejectReason::Validation(format!(
                "Restaurant is closed on {date}"
            )));
        }

        let session = view
            .sessions
            .iter()
            .find(|s| s.times.contains(&time))
            .map(|s| s.session.clone())
            .ok_or_else(|| {
                RejectReason::Validation(format!("{} is not an available time on {date}", request.time))
            })?;

        Ok(Slot::new(date, session, time))
    }
}
