//! 日历配置文件加载
//!
//! 可选的 `calendar.json` 覆盖内置日历。格式:
//!
//! ```json
//! {
//!   "closed_weekdays": ["monday"],
//!   "sessions": [
//!     { "name": "lunch", "start": "12:00", "end": "14:00", "step_minutes": 30 }
//!   ],
//!   "exceptions": {
//!     "2026-12-25": { "closed": true },
//!     "2026-12-31": { "sessions": [ ... ] }
//!   }
//! }
//! ```
//!
//! 失败语义 (fail closed):
//! - 单条例外格式错误 → 该日期按强制闭店处理，绝不放大可订范围
//! - 例外的日期键无法解析 → 跳过并告警 (影响不到任何具体日期)
//! - 整个文件缺失 → 使用内置日历
//! - 整个文件无法解析 → 启动失败 (配置损坏不应静默降级)

use super::{DateException, ServiceCalendar, SessionWindow};
use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CalendarFile {
    #[serde(default)]
    closed_weekdays: Vec<String>,
    sessions: Vec<SessionSpec>,
    #[serde(default)]
    exceptions: HashMap<String, ExceptionSpec>,
}

#[derive(Debug, Deserialize)]
struct SessionSpec {
    name: String,
    start: String,
    end: String,
    step_minutes: u32,
}

#[derive(Debug, Deserialize)]
struct ExceptionSpec {
    #[serde(default)]
    closed: bool,
    #[serde(default)]
    sessions: Vec<SessionSpec>,
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_ascii_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

fn parse_session(spec: &SessionSpec) -> Option<SessionWindow> {
    let start = NaiveTime::parse_from_str(&spec.start, "%H:%M").ok()?;
    let end = NaiveTime::parse_from_str(&spec.end, "%H:%M").ok()?;
    Some(SessionWindow::new(
        spec.name.clone(),
        start,
        end,
        spec.step_minutes,
    ))
}

fn build_calendar(file: CalendarFile) -> ServiceCalendar {
    let mut closed_weekdays = HashSet::new();
    for raw in &file.closed_weekdays {
        match parse_weekday(raw) {
            Some(day) => {
                closed_weekdays.insert(day);
            }
            None => tracing::warn!(weekday = %raw, "Unknown weekday in calendar config, ignored"),
        }
    }

    let sessions: Vec<SessionWindow> = file
        .sessions
        .iter()
        .filter_map(|spec| {
            let parsed = parse_session(spec);
            if parsed.is_none() {
                tracing::warn!(session = %spec.name, "Malformed session window, ignored");
            }
            parsed
        })
        .collect();

    let mut exceptions = HashMap::new();
    for (raw_date, spec) in &file.exceptions {
        let Ok(date) = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") else {
            tracing::warn!(date = %raw_date, "Unparseable exception date, ignored");
            continue;
        };
        if spec.closed {
            exceptions.insert(date, DateException::Closed);
            continue;
        }
        let mut windows = Vec::with_capacity(spec.sessions.len());
        let mut malformed = false;
        for session in &spec.sessions {
            match parse_session(session) {
                Some(w) => windows.push(w),
                None => malformed = true,
            }
        }
        if malformed || windows.is_empty() {
            // fail closed: 损坏的例外按闭店处理，不回退到默认场次
            tracing::warn!(date = %date, "Malformed exception entry, treating date as closed");
            exceptions.insert(date, DateException::Closed);
        } else {
            exceptions.insert(date, DateException::Sessions(windows));
        }
    }

    ServiceCalendar::new(closed_weekdays, sessions, exceptions)
}

/// 加载日历: 文件缺失时返回内置日历，文件损坏时报错
pub fn load_calendar(path: &Path) -> anyhow::Result<ServiceCalendar> {
    if !path.exists() {
        tracing::info!("No calendar.json found, using built-in calendar");
        return Ok(ServiceCalendar::default_calendar());
    }
    let raw = std::fs::read_to_string(path)?;
    let file: CalendarFile = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("calendar.json is not valid: {}", e))?;
    tracing::info!(path = %path.display(), "Loaded calendar configuration");
    Ok(build_calendar(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn parse(json: &str) -> ServiceCalendar {
        build_calendar(serde_json::from_str(json).unwrap())
    }

    const BASE: &str = r#"{
        "closed_weekdays": ["monday"],
        "sessions": [
            { "name": "lunch", "start": "12:00", "end": "14:00", "step_minutes": 30 },
            { "name": "dinner", "start": "19:00", "end": "21:30", "step_minutes": 30 }
        ]
    }"#;

    #[test]
    fn parses_base_calendar() {
        let cal = parse(BASE);
        let tuesday = d(2026, 9, 8);
        assert_eq!(tuesday.weekday(), chrono::Weekday::Tue);
        assert_eq!(cal.sessions_for(tuesday, d(2026, 9, 1)).len(), 2);
        assert!(!cal.is_open(d(2026, 9, 7), d(2026, 9, 1))); // monday
    }

    #[test]
    fn closed_exception_wins() {
        let cal = parse(
            r#"{
                "sessions": [{ "name": "dinner", "start": "19:00", "end": "21:30", "step_minutes": 30 }],
                "exceptions": { "2026-12-25": { "closed": true } }
            }"#,
        );
        assert!(!cal.is_open(d(2026, 12, 25), d(2026, 9, 1)));
    }

    #[test]
    fn malformed_exception_fails_closed() {
        // 25 décembre: 场次时刻损坏 → 当天闭店而不是回退默认场次
        let cal = parse(
            r#"{
                "sessions": [{ "name": "dinner", "start": "19:00", "end": "21:30", "step_minutes": 30 }],
                "exceptions": {
                    "2026-12-25": { "sessions": [{ "name": "dinner", "start": "nonsense", "end": "21:30", "step_minutes": 30 }] }
                }
            }"#,
        );
        assert!(!cal.is_open(d(2026, 12, 25), d(2026, 9, 1)));
        // 其他日期不受影响
        assert!(cal.is_open(d(2026, 12, 26), d(2026, 9, 1)));
    }

    #[test]
    fn unparseable_exception_date_is_skipped() {
        let cal = parse(
            r#"{
                "sessions": [{ "name": "dinner", "start": "19:00", "end": "21:30", "step_minutes": 30 }],
                "exceptions": { "not-a-date": { "closed": true } }
            }"#,
        );
        assert!(cal.is_open(d(2026, 9, 8), d(2026, 9, 1)));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let cal = load_calendar(Path::new("/definitely/not/here/calendar.json")).unwrap();
        assert!(!cal.is_open(d(2026, 9, 7), d(2026, 9, 1))); // monday closed by default
    }
}
