use crate::models::PrayerKind;
use chrono::NaiveDateTime;

/// A prayer pinned to an absolute local timestamp for today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerEvent {
    pub kind: PrayerKind,
    pub at: NaiveDateTime,
}

impl PrayerEvent {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Annotation attached to each event of a resolved schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    None,
    Current,
    Next(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchedule {
    pub events: Vec<PrayerEvent>,
    pub current_index: usize,
    pub next_index: usize,
    /// Countdown to the event at `next_index`.
    pub countdown: String,
}

impl ResolvedSchedule {
    /// Marker for the event at `index`. Current takes precedence when
    /// current and next coincide.
    pub fn marker(&self, index: usize) -> Marker {
        if index == self.current_index {
            Marker::Current
        } else if index == self.next_index {
            Marker::Next(self.countdown.clone())
        } else {
            Marker::None
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&PrayerEvent, Marker)> + '_ {
        self.events
            .iter()
            .enumerate()
            .map(|(i, ev)| (ev, self.marker(i)))
    }

    pub fn current(&self) -> Option<&PrayerEvent> {
        self.events.get(self.current_index)
    }

    pub fn next(&self) -> Option<&PrayerEvent> {
        self.events.get(self.next_index)
    }
}

/// What gets rendered for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodayView {
    Schedule(ResolvedSchedule),
    /// The year's data has no entry for today.
    NoData,
    /// The provider could not be reached; carries the reason.
    Unavailable(String),
}
