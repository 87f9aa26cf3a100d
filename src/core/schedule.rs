//! Builds today's ordered prayer events from a daily record.

use crate::errors::{AppError, AppResult};
use crate::models::{DailyRecord, PrayerEvent, PrayerKind};
use crate::utils::time::parse_hms;
use chrono::NaiveDateTime;

/// One event per [`PrayerKind::ALL`] entry, in that order, each placed on
/// `now`'s calendar date.
///
/// Fails with `MalformedRecord` when a prayer is missing from the record or
/// its time is not `HH:MM:SS`.
pub fn build(record: &DailyRecord, now: NaiveDateTime) -> AppResult<Vec<PrayerEvent>> {
    let date = now.date();

    PrayerKind::ALL
        .iter()
        .map(|&kind| {
            let raw = record.time_of(kind).ok_or_else(|| AppError::MalformedRecord {
                date: record.date.clone(),
                reason: format!("missing '{}'", kind.key()),
            })?;

            let time = parse_hms(raw).map_err(|_| AppError::MalformedRecord {
                date: record.date.clone(),
                reason: format!("unparsable time '{}' for '{}'", raw, kind.key()),
            })?;

            Ok(PrayerEvent {
                kind,
                at: date.and_time(time),
            })
        })
        .collect()
}
