//! 预订子系统 - 容量账目、可订性解析与预订流水线
//!
//! # 提交流程
//!
//! ```text
//! submit(request)
//!     ├─ 1. 解析日期/时刻，验证联系方式与人数
//!     ├─ 2. 重新推导当日可订时刻 (不信任客户端)
//!     ├─ 3. try_reserve: 原子 check-and-increment (唯一同步点)
//!     ├─ 4. 持久化预订记录 (redb)
//!     │      └─ 失败 → release 回滚容量
//!     └─ 5. 返回 Confirmed 预订或 Rejected(原因)
//! ```
//!
//! 唯一的共享可变资源是每个时段的容量记录；`try_reserve`
//! 是它唯一的同步变更入口。可订性读取允许轻微陈旧 —
//! 给用户看的列表只是参考，权威判定在提交时再做一次。

pub mod availability;
pub mod capacity;
pub mod engine;
pub mod storage;

pub use availability::AvailabilityResolver;
pub use capacity::{ReserveOutcome, SlotCapacityStore};
pub use engine::{BookingEngine, RejectReason};
pub use storage::{ReservationStore, StorageError};
