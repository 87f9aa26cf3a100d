use crate::models::{PrayerKind, Zone};
use crate::utils::date::{PROVIDER_DATE_FORMAT, provider_date};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One calendar day as delivered by the provider.
///
/// Prayer times are kept as the raw `HH:MM:SS` strings; they are validated
/// when the day's schedule is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRecord {
    /// Provider date, e.g. `05-Mar-2024`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hijri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl DailyRecord {
    /// Raw time-of-day string for `kind`, if present and a string.
    pub fn time_of(&self, kind: PrayerKind) -> Option<&str> {
        self.fields.get(kind.key()).and_then(|v| v.as_str())
    }

    pub fn is_dated(&self, date: NaiveDate) -> bool {
        self.date == provider_date(date)
    }

    /// Calendar year of `date`, if it is in the provider format.
    pub fn year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(&self.date, PROVIDER_DATE_FORMAT)
            .ok()
            .map(|d| d.year())
    }
}

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(rename = "prayerTime", default)]
    prayer_time: Vec<DailyRecord>,
}

/// A full year of daily records for one zone, together with the exact
/// payload it was parsed from.
#[derive(Debug, Clone)]
pub struct YearBundle {
    pub zone: Zone,
    pub year: i32,
    pub days: Vec<DailyRecord>,
    raw: String,
}

impl YearBundle {
    /// Parse a provider payload. A payload without `prayerTime` yields an
    /// empty bundle.
    pub fn from_payload(zone: Zone, year: i32, raw: String) -> Result<Self, serde_json::Error> {
        let payload: Payload = serde_json::from_str(&raw)?;
        Ok(Self {
            zone,
            year,
            days: payload.prayer_time,
            raw,
        })
    }

    /// The payload exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether any day is dated in the bundle's own year.
    pub fn covers_year(&self) -> bool {
        self.days.iter().any(|d| d.year() == Some(self.year))
    }

    pub fn find_day(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.days.iter().find(|d| d.is_dated(date))
    }
}

/// Outcome of looking up today's record. Absence is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(DailyRecord),
    NotFound,
}
