//! Time utilities: parsing provider HH:MM:SS values and 12-hour rendering.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime};

pub fn parse_hms(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M:%S")
        .map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// `05:45 AM` style rendering.
pub fn format_12h(at: &NaiveDateTime) -> String {
    at.format("%I:%M %p").to_string()
}
