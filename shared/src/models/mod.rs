//! 数据模型模块
//!
//! 平台所有实体的线缆层定义。日期统一 `YYYY-MM-DD`，
//! 时刻统一 `HH:MM` (见 [`serde_helpers`])。

pub mod availability;
pub mod contact;
pub mod menu;
pub mod reservation;
pub mod review;
pub mod serde_helpers;
pub mod slot;
pub mod store_info;

pub use availability::{AvailabilityView, SessionTimes};
pub use contact::ContactMessage;
pub use menu::{Menu, MenuCategory, MenuItem};
pub use reservation::{Reservation, ReservationContact, ReservationStatus};
pub use review::Review;
pub use slot::Slot;
pub use store_info::{Coordinates, DayHours, StoreInfo};
