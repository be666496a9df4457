//! 后端时间字段的解析
//!
//! 后端返回的时间可能是 `yyyy-MM-dd HH:mm:ss`，也可能是 RFC 3339。

use chrono::{DateTime, NaiveDateTime};

/// 统一的输出格式
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_FORMATS: [&str; 4] = [
    DATETIME_FORMAT,
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

pub fn format(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// `Option<NaiveDateTime>` 的 serde 适配
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&super::format(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse(s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("无效的时间格式: '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Audit {
        #[serde(default, with = "super::option")]
        create_time: Option<NaiveDateTime>,
    }

    #[test]
    fn test_parse_supported_formats() {
        let expected = NaiveDateTime::parse_from_str("2024-03-01 08:30:00", DATETIME_FORMAT)
            .expect("fixture");
        assert_eq!(parse("2024-03-01 08:30:00"), Some(expected));
        assert_eq!(parse("2024-03-01T08:30:00"), Some(expected));
        assert_eq!(parse("2024-03-01 08:30"), Some(expected));
        assert_eq!(parse("2024-03-01T08:30:00+08:00"), Some(expected));
        assert_eq!(parse("yesterday"), None);
    }

    #[test]
    fn test_option_adapter() {
        let audit: Audit = serde_json::from_str(r#"{"create_time": ""}"#).expect("empty");
        assert!(audit.create_time.is_none());
        let audit: Audit = serde_json::from_str("{}").expect("missing");
        assert!(audit.create_time.is_none());
        let audit: Audit =
            serde_json::from_str(r#"{"create_time": "2024-03-01 08:30:00"}"#).expect("value");
        assert!(audit.create_time.is_some());
        assert!(serde_json::from_str::<Audit>(r#"{"create_time": "bad"}"#).is_err());
    }
}
