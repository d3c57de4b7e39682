//! Serde helpers for wire-level time formats
//!
//! 预订接口的时刻一律使用 `HH:MM` 字符串 (如 "19:30")，
//! 与 chrono 默认的 `HH:MM:SS` 不同，这里提供专用的 serde 适配。

use chrono::NaiveTime;
use serde::{self, Deserialize, Deserializer, Serializer};

pub const TIME_FORMAT: &str = "%H:%M";

/// Serialize a `NaiveTime` as `HH:MM`
pub mod time_hhmm {
    use super::*;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Serialize a `Vec<NaiveTime>` as `["HH:MM", ...]`
pub mod time_hhmm_vec {
    use super::*;

    pub fn serialize<S>(times: &[NaiveTime], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(times.iter().map(|t| t.format(TIME_FORMAT).to_string()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Vec<String> = Vec::deserialize(deserializer)?;
        raw.iter()
            .map(|s| NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(serde::de::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "time_hhmm")]
        time: NaiveTime,
    }

    #[test]
    fn time_serializes_without_seconds() {
        let w = Wrapper {
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        };
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"time":"19:30"}"#);

        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time, w.time);
    }

    #[test]
    fn rejects_malformed_time() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"time":"25:99"}"#).is_err());
    }
}
