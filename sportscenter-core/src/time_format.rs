//! Wire format for date-time fields: `yyyy-MM-dd HH:mm:ss`.
//!
//! Existing clients parse this exact shape, so it must stay bit-exact —
//! no ISO 8601, no epoch numbers, no fractional seconds.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{self, Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

/// Same format for `Option<DateTime<Utc>>` fields (nullable timestamps).
pub mod option {
    use super::FORMAT;
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => NaiveDateTime::parse_from_str(&s, FORMAT)
                .map(|naive| Some(naive.and_utc()))
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "super")]
        at: chrono::DateTime<Utc>,
    }

    #[test]
    fn serializes_in_wire_format() {
        let stamp = Stamp {
            at: Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 42).unwrap(),
        };
        let json = serde_json::to_string(&stamp).unwrap();
        assert_eq!(json, r#"{"at":"2025-03-07 09:05:42"}"#);
    }

    #[test]
    fn round_trips() {
        let parsed: Stamp = serde_json::from_str(r#"{"at":"2025-12-31 23:59:59"}"#).unwrap();
        assert_eq!(
            parsed.at,
            Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap()
        );
    }

    #[test]
    fn rejects_iso_8601() {
        let res: Result<Stamp, _> = serde_json::from_str(r#"{"at":"2025-03-07T09:05:42Z"}"#);
        assert!(res.is_err());
    }
}
