//! 服务日历 - 营业日与场次规则
//!
//! ServiceCalendar 是纯配置: 哪些星期闭店、每天有哪些服务场次
//! (午市/晚市)、每个场次以固定步长展开出哪些候选时刻。
//! 不做任何 I/O，也不感知容量 — 容量归 [`crate::booking`]。
//!
//! # 判定规则
//!
//! 一个日期"开放"当且仅当:
//! 1. 不早于今天 (业务时区)
//! 2. 没有被例外 (节假日) 强制闭店
//! 3. 不落在闭店星期上 (除非例外覆盖了场次)
//! 4. 至少有一个场次能展开出至少一个候选时刻

mod loader;

pub use loader::load_calendar;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use std::collections::{HashMap, HashSet};

/// 一个命名的服务场次窗口
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionWindow {
    /// 场次名，如 "lunch" / "dinner"
    pub name: String,
    pub start: NaiveTime,
    /// 含端点: end 本身也是候选时刻
    pub end: NaiveTime,
    /// 候选时刻步长 (分钟)
    pub step_minutes: u32,
}

impl SessionWindow {
    pub fn new(name: impl Into<String>, start: NaiveTime, end: NaiveTime, step_minutes: u32) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            step_minutes,
        }
    }

    /// 展开候选时刻: start, start+step, ... , end (含)
    ///
    /// step 为 0 或 start > end 时返回空 — 配置病态时不产生任何时段。
    pub fn candidate_times(&self) -> Vec<NaiveTime> {
        if self.step_minutes == 0 || self.start > self.end {
            return Vec::new();
        }
        let step = Duration::minutes(self.step_minutes as i64);
        let mut times = Vec::new();
        let mut cursor = self.start;
        loop {
            times.push(cursor);
            let (next, wrapped) = cursor.overflowing_add_signed(step);
            // NaiveTime 加法会跨午夜回绕，回绕即越过窗口终点
            if wrapped != 0 || next > self.end {
                break;
            }
            cursor = next;
        }
        times
    }
}

/// 特定日期的例外覆盖 (节假日)
#[derive(Debug, Clone)]
pub enum DateException {
    /// 强制闭店
    Closed,
    /// 覆盖当天的场次表 (无视闭店星期)
    Sessions(Vec<SessionWindow>),
}

/// 某场次在某天展开出的候选时刻
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCandidates {
    pub name: String,
    pub times: Vec<NaiveTime>,
}

/// 服务日历 - 不可变配置，所有组件只读共享
#[derive(Debug, Clone)]
pub struct ServiceCalendar {
    closed_weekdays: HashSet<Weekday>,
    sessions: Vec<SessionWindow>,
    exceptions: HashMap<NaiveDate, DateException>,
}

impl ServiceCalendar {
    pub fn new(
        closed_weekdays: HashSet<Weekday>,
        sessions: Vec<SessionWindow>,
        exceptions: HashMap<NaiveDate, DateException>,
    ) -> Self {
        Self {
            closed_weekdays,
            sessions,
            exceptions,
        }
    }

    /// 内置日历: 周一闭店，午市 12:00-14:00、晚市 19:00-21:30，步长 30 分钟
    pub fn default_calendar() -> Self {
        let lunch = SessionWindow::new(
            "lunch",
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            30,
        );
        let dinner = SessionWindow::new(
            "dinner",
            NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(21, 30, 0).unwrap(),
            30,
        );
        Self::new(
            HashSet::from([Weekday::Mon]),
            vec![lunch, dinner],
            HashMap::new(),
        )
    }

    /// 判定某日期是否开放 (today 由调用方按业务时区给出)
    pub fn is_open(&self, date: NaiveDate, today: NaiveDate) -> bool {
        !self.sessions_for(date, today).is_empty()
    }

    /// 某日期的场次及其候选时刻，闭店时为空
    ///
    /// 顺序与配置中的场次顺序一致。
    pub fn sessions_for(&self, date: NaiveDate, today: NaiveDate) -> Vec<SessionCandidates> {
        if date < today {
            return Vec::new();
        }

        let sessions: &[SessionWindow] = match self.exceptions.get(&date) {
            Some(DateException::Closed) => return Vec::new(),
            Some(DateException::Sessions(overridden)) => overridden,
            None => {
                if self.closed_weekdays.contains(&date.weekday()) {
                    return Vec::new();
                }
                &self.sessions
            }
        };

        sessions
            .iter()
            .map(|s| SessionCandidates {
                name: s.name.clone(),
                times: s.candidate_times(),
            })
            .filter(|s| !s.times.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn session_expands_inclusive_end() {
        let s = SessionWindow::new("lunch", t(12, 0), t(14, 0), 30);
        assert_eq!(
            s.candidate_times(),
            vec![t(12, 0), t(12, 30), t(13, 0), t(13, 30), t(14, 0)]
        );
    }

    #[test]
    fn degenerate_session_yields_no_times() {
        assert!(SessionWindow::new("x", t(12, 0), t(14, 0), 0).candidate_times().is_empty());
        assert!(SessionWindow::new("x", t(14, 0), t(12, 0), 30).candidate_times().is_empty());
    }

    #[test]
    fn closed_weekday_is_not_open() {
        let cal = ServiceCalendar::default_calendar();
        let monday = d(2026, 9, 7);
        assert_eq!(monday.weekday(), Weekday::Mon);
        assert!(!cal.is_open(monday, d(2026, 9, 1)));
        assert!(cal.sessions_for(monday, d(2026, 9, 1)).is_empty());
    }

    #[test]
    fn past_date_is_not_open() {
        let cal = ServiceCalendar::default_calendar();
        let tuesday = d(2026, 9, 1);
        assert!(!cal.is_open(tuesday, d(2026, 9, 2)));
        // 当天仍可订
        assert!(cal.is_open(tuesday, tuesday));
    }

    #[test]
    fn open_day_sessions_in_order() {
        let cal = ServiceCalendar::default_calendar();
        let tuesday = d(2026, 9, 8);
        let sessions = cal.sessions_for(tuesday, d(2026, 9, 1));
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].name, "lunch");
        assert_eq!(sessions[1].name, "dinner");
        assert_eq!(sessions[1].times.len(), 6); // 19:00..=21:30
    }

    #[test]
    fn exception_forces_closed() {
        let mut cal = ServiceCalendar::default_calendar();
        let tuesday = d(2026, 9, 8);
        cal.exceptions.insert(tuesday, DateException::Closed);
        assert!(!cal.is_open(tuesday, d(2026, 9, 1)));
    }

    #[test]
    fn exception_overrides_closed_weekday() {
        let mut cal = ServiceCalendar::default_calendar();
        let monday = d(2026, 9, 7);
        cal.exceptions.insert(
            monday,
            DateException::Sessions(vec![SessionWindow::new("dinner", t(19, 0), t(21, 0), 30)]),
        );
        let sessions = cal.sessions_for(monday, d(2026, 9, 1));
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].name, "dinner");
    }

    #[test]
    fn exception_with_degenerate_sessions_is_closed() {
        let mut cal = ServiceCalendar::default_calendar();
        let tuesday = d(2026, 9, 8);
        cal.exceptions.insert(
            tuesday,
            DateException::Sessions(vec![SessionWindow::new("x", t(14, 0), t(12, 0), 30)]),
        );
        assert!(!cal.is_open(tuesday, d(2026, 9, 1)));
    }
}
