//! Wire format for clock times.
//!
//! Appointment times travel as `HH:MM`. Input also accepts `HH:MM:SS`.

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%H:%M";

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Render a time as `HH:MM`.
pub fn format_time(time: &NaiveTime) -> String {
    time.format(FORMAT).to_string()
}

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_time(time))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_time(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid time '{}', expected HH:MM", raw)))
}

/// Same format for optional fields.
pub mod option {
    use super::*;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_some(&format_time(t)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_time(&raw).map(Some).ok_or_else(|| {
                de::Error::custom(format!("invalid time '{}', expected HH:MM", raw))
            }),
            None => Ok(None),
        }
    }
}
