//! 时间工具函数 — 业务时区与线缆格式解析
//!
//! 日期/时刻字符串的解析统一在这里完成，handler 和引擎
//! 只处理解析后的 `NaiveDate` / `NaiveTime`。

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 解析时刻字符串 (HH:MM)
pub fn parse_time(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", time)))
}

/// 业务时区的"今天"
///
/// 营业日判定 (过去日期、当日可订) 全部以此为准，
/// 与服务器所在机器的本地时区无关。
pub fn today_in_tz(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        assert_eq!(
            parse_date("2026-09-08").unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 8).unwrap()
        );
        assert!(parse_date("08/09/2026").is_err());
        assert!(parse_date("2026-13-40").is_err());
    }

    #[test]
    fn parses_hhmm_time() {
        assert_eq!(
            parse_time("19:30").unwrap(),
            NaiveTime::from_hms_opt(19, 30, 0).unwrap()
        );
        assert!(parse_time("19h30").is_err());
        assert!(parse_time("25:00").is_err());
    }
}
