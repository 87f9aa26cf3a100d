use chrono::NaiveDate;
use rsolat::core::logic::Core;
use rsolat::core::resolver::Rollover;
use rsolat::errors::AppError;
use rsolat::models::TodayView;
use rsolat::output::{self, OutputFormat, alfred};
use rsolat::store::{DailyRecordStore, MemoryStorage};
use serde_json::{Value, json};

mod common;
use common::{CountingProvider, FailingProvider, payload, reference_day, zone};

fn view_at(days: Vec<Value>, h: u32, m: u32) -> TodayView {
    let provider = CountingProvider::new(payload(days));
    let store = DailyRecordStore::new(MemoryStorage::new(), &provider);
    let now = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap();
    Core::today_view(&store, &zone(), now, Rollover::SameDay).unwrap()
}

#[test]
fn test_alfred_items_for_afternoon() {
    let view = view_at(vec![reference_day("05-Mar-2024")], 14, 0);
    let items = alfred::items(&view, "./mosque.png");

    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Imsak",
            "Subuh",
            "Syuruk",
            "Zohor (Current)",
            "Asar (in 2h 30m)",
            "Maghrib",
            "Isya"
        ]
    );

    assert_eq!(items[0].subtitle.as_deref(), Some("05:39 AM"));
    assert_eq!(items[3].subtitle.as_deref(), Some("01:09 PM"));
    assert_eq!(items[6].subtitle.as_deref(), Some("08:31 PM"));
    assert!(items.iter().all(|i| i.icon.as_ref().unwrap().path == "./mosque.png"));
}

#[test]
fn test_alfred_json_shape() {
    let view = view_at(vec![reference_day("05-Mar-2024")], 14, 0);
    let rendered = output::render(&view, OutputFormat::Alfred, "./mosque.png").unwrap();
    let doc: Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(
        doc["items"][4],
        json!({
            "title": "Asar (in 2h 30m)",
            "subtitle": "04:30 PM",
            "icon": { "path": "./mosque.png" }
        })
    );
}

#[test]
fn test_no_record_for_today_renders_single_item() {
    let view = view_at(vec![reference_day("04-Mar-2024")], 14, 0);
    assert_eq!(view, TodayView::NoData);

    let rendered = output::render(&view, OutputFormat::Alfred, "./mosque.png").unwrap();
    let doc: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(doc, json!({ "items": [{ "title": "No prayer data available" }] }));
}

#[test]
fn test_provider_failure_degrades_to_unavailable_item() {
    let store = DailyRecordStore::new(MemoryStorage::new(), FailingProvider);
    let now = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();

    let view = Core::today_view(&store, &zone(), now, Rollover::SameDay).unwrap();
    let items = alfred::items(&view, "./mosque.png");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Prayer times unavailable");
    assert!(items[0].subtitle.as_deref().unwrap().contains("connection refused"));
    assert!(items[0].icon.is_none());
}

#[test]
fn test_malformed_record_is_an_error() {
    let mut day = reference_day("05-Mar-2024");
    day.as_object_mut().unwrap().remove("isha");

    let provider = CountingProvider::new(payload(vec![day]));
    let store = DailyRecordStore::new(MemoryStorage::new(), &provider);
    let now = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();

    let err = Core::today_view(&store, &zone(), now, Rollover::SameDay).unwrap_err();
    assert!(matches!(err, AppError::MalformedRecord { .. }));
}

#[test]
fn test_text_rendering() {
    let view = view_at(vec![reference_day("05-Mar-2024")], 14, 0);
    let text = output::render(&view, OutputFormat::Text, "ignored").unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[3], "Zohor    01:09 PM  <- current");
    assert_eq!(lines[4], "Asar     04:30 PM  (in 2h 30m)");
    assert_eq!(lines[5], "Maghrib  07:20 PM");

    let none = output::render(&TodayView::NoData, OutputFormat::Text, "ignored").unwrap();
    assert_eq!(none, "No prayer data available");
}
