//! Bookable slot identity

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::serde_helpers::time_hhmm;

/// A bookable slot: (date, service session, time-of-day)
///
/// 时段本身是从 ServiceCalendar 按需展开的，不单独落库；
/// 只有它的容量账目 (committed covers) 会变化。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub date: NaiveDate,
    /// Session name, e.g. "lunch" / "dinner"
    pub session: String,
    #[serde(with = "time_hhmm")]
    pub time: NaiveTime,
}

impl Slot {
    pub fn new(date: NaiveDate, session: impl Into<String>, time: NaiveTime) -> Self {
        Self {
            date,
            session: session.into(),
            time,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date,
            self.session,
            self.time.format("%H:%M")
        )
    }
}
