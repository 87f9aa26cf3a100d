//! Terminal rendering.

use crate::models::{Marker, TodayView};
use crate::output::{NO_DATA_TITLE, UNAVAILABLE_TITLE};
use crate::utils::formatting::pad_right;
use crate::utils::time::format_12h;

const LABEL_WIDTH: usize = 9;

pub fn render(view: &TodayView) -> String {
    match view {
        TodayView::Schedule(schedule) => schedule
            .entries()
            .map(|(ev, marker)| {
                let line = format!("{}{}", pad_right(ev.label(), LABEL_WIDTH), format_12h(&ev.at));
                match marker {
                    Marker::Current => format!("{}  <- current", line),
                    Marker::Next(countdown) => format!("{}  ({})", line, countdown),
                    Marker::None => line,
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        TodayView::NoData => NO_DATA_TITLE.to_string(),
        TodayView::Unavailable(reason) => format!("{}: {}", UNAVAILABLE_TITLE, reason),
    }
}
