//! 可订性解析
//!
//! 只读路径: 每次调用都从日历 + 容量账目重新计算，不持有任何
//! 自己的状态，可被任意频率重复调用 (幂等、无副作用)。

use std::sync::Arc;

use chrono::NaiveDate;
use shared::models::{AvailabilityView, SessionTimes, Slot};

use crate::calendar::ServiceCalendar;

use super::capacity::SlotCapacityStore;

/// 给定日期，回答"哪些时刻还能订"
///
/// 闭店与"开放但全满"是两种不同的答案:
/// 前者 `open = false` 且无场次，后者 `open = true` 但场次时刻为空，
/// 调用方应区别呈现。
pub struct AvailabilityResolver {
    calendar: Arc<ServiceCalendar>,
    capacity: Arc<SlotCapacityStore>,
    max_covers: u32,
}

impl AvailabilityResolver {
    pub fn new(
        calendar: Arc<ServiceCalendar>,
        capacity: Arc<SlotCapacityStore>,
        max_covers: u32,
    ) -> Self {
        Self {
            calendar,
            capacity,
            max_covers,
        }
    }

    /// 某日期各场次仍可订的时刻，保持候选顺序
    ///
    /// 一个时刻可订 = 其时段 committed < max_covers。
    pub fn available_times(&self, date: NaiveDate, today: NaiveDate) -> AvailabilityView {
        let sessions = self.calendar.sessions_for(date, today);
        if sessions.is_empty() {
            return AvailabilityView::closed(date);
        }

        let sessions = sessions
            .into_iter()
            .map(|candidates| {
                let times = candidates
                    .times
                    .into_iter()
                    .filter(|&time| {
                        let slot = Slot::new(date, candidates.name.clone(), time);
                        self.capacity.committed(&slot) < self.max_covers
                    })
                    .collect();
                SessionTimes {
                    session: candidates.name,
                    times,
                }
            })
            .collect();

        AvailabilityView {
            date,
            open: true,
            sessions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn resolver(max_covers: u32) -> (AvailabilityResolver, Arc<SlotCapacityStore>) {
        let capacity = Arc::new(SlotCapacityStore::new());
        let resolver = AvailabilityResolver::new(
            Arc::new(ServiceCalendar::default_calendar()),
            Arc::clone(&capacity),
            max_covers,
        );
        (resolver, capacity)
    }

    #[test]
    fn closed_monday_has_no_sessions() {
        let (resolver, _) = resolver(20);
        let view = resolver.available_times(d(2026, 9, 7), d(2026, 9, 1));
        assert!(!view.open);
        assert!(view.sessions.is_empty());
    }

    #[test]
    fn open_day_lists_all_candidate_times() {
        let (resolver, _) = resolver(20);
        let view = resolver.available_times(d(2026, 9, 8), d(2026, 9, 1));
        assert!(view.open);
        assert_eq!(view.sessions[0].session, "lunch");
        assert_eq!(view.sessions[0].times.len(), 5);
        assert_eq!(view.sessions[1].session, "dinner");
        assert_eq!(view.sessions[1].times.len(), 6);
    }

    #[test]
    fn full_slot_drops_out_preserving_order() {
        let (resolver, capacity) = resolver(10);
        let date = d(2026, 9, 8);
        capacity.seed(&Slot::new(date, "dinner", t(19, 30)), 10);

        let view = resolver.available_times(date, d(2026, 9, 1));
        let dinner = &view.sessions[1];
        assert_eq!(
            dinner.times,
            vec![t(19, 0), t(20, 0), t(20, 30), t(21, 0), t(21, 30)]
        );
    }

    #[test]
    fn partially_used_slot_stays_bookable() {
        let (resolver, capacity) = resolver(10);
        let date = d(2026, 9, 8);
        capacity.seed(&Slot::new(date, "dinner", t(19, 0)), 9);

        let view = resolver.available_times(date, d(2026, 9, 1));
        assert!(view.sessions[1].times.contains(&t(19, 0)));
    }

    #[test]
    fn fully_booked_day_is_open_with_empty_sessions() {
        let (resolver, capacity) = resolver(2);
        let date = d(2026, 9, 8);
        // 填满所有时段
        for candidates in ServiceCalendar::default_calendar().sessions_for(date, date) {
            for time in candidates.times {
                capacity.seed(&Slot::new(date, candidates.name.clone(), time), 2);
            }
        }

        let view = resolver.available_times(date, d(2026, 9, 1));
        assert!(view.open);
        assert!(view.is_fully_booked());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let (resolver, capacity) = resolver(10);
        let date = d(2026, 9, 8);
        capacity.seed(&Slot::new(date, "lunch", t(12, 30)), 10);

        let first = resolver.available_times(date, d(2026, 9, 1));
        let second = resolver.available_times(date, d(2026, 9, 1));
        assert_eq!(first, second);
    }
}
