//! Alfred script filter items.

use crate::errors::AppResult;
use crate::models::{Marker, ResolvedSchedule, TodayView};
use crate::output::{NO_DATA_TITLE, UNAVAILABLE_TITLE};
use crate::utils::time::format_12h;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Icon {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

#[derive(Debug, Serialize)]
pub struct ScriptFilter {
    pub items: Vec<Item>,
}

pub fn items(view: &TodayView, icon_path: &str) -> Vec<Item> {
    match view {
        TodayView::Schedule(schedule) => schedule_items(schedule, icon_path),
        TodayView::NoData => vec![Item {
            title: NO_DATA_TITLE.to_string(),
            subtitle: None,
            icon: None,
        }],
        TodayView::Unavailable(reason) => vec![Item {
            title: UNAVAILABLE_TITLE.to_string(),
            subtitle: Some(reason.clone()),
            icon: None,
        }],
    }
}

fn schedule_items(schedule: &ResolvedSchedule, icon_path: &str) -> Vec<Item> {
    schedule
        .entries()
        .map(|(ev, marker)| {
            let title = match marker {
                Marker::Current => format!("{} (Current)", ev.label()),
                Marker::Next(countdown) => format!("{} ({})", ev.label(), countdown),
                Marker::None => ev.label().to_string(),
            };
            Item {
                title,
                subtitle: Some(format_12h(&ev.at)),
                icon: Some(Icon {
                    path: icon_path.to_string(),
                }),
            }
        })
        .collect()
}

pub fn render(view: &TodayView, icon_path: &str) -> AppResult<String> {
    let doc = ScriptFilter {
        items: items(view, icon_path),
    };
    Ok(serde_json::to_string(&doc)?)
}
