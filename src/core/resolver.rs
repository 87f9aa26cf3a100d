//! Current/next prayer resolution and countdown formatting.

use crate::models::{PrayerEvent, ResolvedSchedule};
use chrono::{Duration, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Serialize};

/// What "next" means once the last prayer of the day has been reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rollover {
    /// Wrap to the first prayer of the same day; its countdown reads "now".
    #[default]
    SameDay,
    /// Wrap to the first prayer's time of day on the following date.
    NextDay,
}

/// Mark the latest reached event as current and the one after it as next.
///
/// Before the first prayer of the day nothing has been reached yet, and the
/// first event is still reported as current.
pub fn resolve(events: &[PrayerEvent], now: NaiveDateTime, rollover: Rollover) -> ResolvedSchedule {
    let current_index = events.iter().rposition(|ev| ev.at <= now).unwrap_or(0);

    let len = events.len();
    let next_index = if len == 0 { 0 } else { (current_index + 1) % len };

    let countdown = match events.get(next_index) {
        Some(next) => {
            let mut target = next.at;
            if rollover == Rollover::NextDay && len > 1 && next_index <= current_index {
                target += Duration::days(1);
            }
            human_diff(target, now)
        }
        None => human_diff(now, now),
    };

    debug!(
        "resolved current={} next={} countdown={}",
        current_index, next_index, countdown
    );

    ResolvedSchedule {
        events: events.to_vec(),
        current_index,
        next_index,
        countdown,
    }
}

/// Truncated countdown: `now`, `in 12m` or `in 2h 5m`.
pub fn human_diff(target: NaiveDateTime, now: NaiveDateTime) -> String {
    let seconds = (target - now).num_seconds();
    if seconds <= 0 {
        return "now".to_string();
    }

    let total_minutes = seconds / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("in {}h {}m", hours, minutes)
    } else {
        format!("in {}m", minutes)
    }
}
