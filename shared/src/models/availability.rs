//! Availability wire types

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::serde_helpers::time_hhmm_vec;

/// 单个服务场次的可订时刻
///
/// `times` 为空表示该场次已订满 (与"闭店"不同，闭店时 `open = false`)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTimes {
    /// Session name, e.g. "lunch" / "dinner"
    pub session: String,
    /// Bookable times in candidate order
    #[serde(with = "time_hhmm_vec")]
    pub times: Vec<NaiveTime>,
}

/// 某一天的可订视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityView {
    pub date: NaiveDate,
    /// false = closed that day (sessions is empty)
    pub open: bool,
    /// Session-partitioned bookable times (candidate order preserved)
    pub sessions: Vec<SessionTimes>,
}

impl AvailabilityView {
    /// A closed day carries no sessions at all
    pub fn closed(date: NaiveDate) -> Self {
        Self {
            date,
            open: false,
            sessions: Vec::new(),
        }
    }

    /// True when the date is open but every session is fully booked
    pub fn is_fully_booked(&self) -> bool {
        self.open && self.sessions.iter().all(|s| s.times.is_empty())
    }
}
