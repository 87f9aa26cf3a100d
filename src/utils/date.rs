use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Date layout used by the e-Solat payload (`05-Mar-2024`).
pub const PROVIDER_DATE_FORMAT: &str = "%d-%b-%Y";

/// Layout accepted by the `--now` override.
pub const NOW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn provider_date(d: NaiveDate) -> String {
    d.format(PROVIDER_DATE_FORMAT).to_string()
}

pub fn parse_now(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), NOW_FORMAT)
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}
