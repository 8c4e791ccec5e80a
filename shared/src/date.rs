//! 日期类型模块
//!
//! 后端与表单给出的时间字符串格式并不统一，这里集中提供宽松的解析：
//! - `datetime`: 预约时间 (`NaiveDateTime`) 的 serde 适配
//! - `day`: 病历日期 (`NaiveDate`) 的 serde 适配

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// 按顺序尝试的本地时间格式
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// 解析时间字符串
///
/// 支持 RFC 3339（丢弃时区偏移，保留本地时间）、
/// `YYYY-MM-DDTHH:MM:SS[.fff]`、HTML `datetime-local` 的 `YYYY-MM-DDTHH:MM`
/// 以及空格分隔的写法。
///
/// 返回 None 如果所有格式都无法解析
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// 解析日期字符串，完整的时间字符串只保留日期部分
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DAY_FORMAT)
        .ok()
        .or_else(|| parse_datetime(s).map(|dt| dt.date()))
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

pub fn format_day(day: &NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub mod datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_datetime(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_datetime(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid date-time: {raw}")))
    }
}

pub mod day {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_day(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_day(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = at(2025, 11, 10, 10, 0);
        assert_eq!(parse_datetime("2025-11-10T10:00:00"), Some(expected));
        assert_eq!(parse_datetime("2025-11-10T10:00"), Some(expected));
        assert_eq!(parse_datetime("2025-11-10 10:00:00"), Some(expected));
        assert_eq!(parse_datetime("2025-11-10T10:00:00.000"), Some(expected));
        assert_eq!(parse_datetime("2025-11-10T10:00:00+02:00"), Some(expected));
        assert_eq!(parse_datetime("not a date"), None);
    }

    #[test]
    fn test_parse_day_accepts_datetime() {
        let expected = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        assert_eq!(parse_day("2024-12-15"), Some(expected));
        assert_eq!(parse_day("2024-12-15T08:30:00"), Some(expected));
        assert_eq!(parse_day("15/12/2024"), None);
    }

    #[test]
    fn test_format_roundtrip_shape() {
        assert_eq!(format_datetime(&at(2025, 1, 2, 3, 4)), "2025-01-02T03:04:00");
        assert_eq!(
            format_day(&NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()),
            "2025-01-20"
        );
    }
}
