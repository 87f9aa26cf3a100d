#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rsolat::errors::{AppError, AppResult};
use rsolat::models::{DailyRecord, Zone};
use rsolat::provider::DataProvider;
use serde_json::json;
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rso() -> Command {
    cargo_bin_cmd!("rsolat")
}

/// Create a fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rsolat_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn zone() -> Zone {
    Zone::parse("WLY01").expect("valid zone")
}

/// The WLY01 reference day used throughout the tests
pub fn reference_day(date: &str) -> serde_json::Value {
    json!({
        "hijri": "1445-08-24",
        "date": date,
        "day": "Tuesday",
        "imsak": "05:39:00",
        "fajr": "05:49:00",
        "syuruk": "07:05:00",
        "dhuhr": "13:09:00",
        "asr": "16:30:00",
        "maghrib": "19:20:00",
        "isha": "20:31:00"
    })
}

pub fn payload(days: Vec<serde_json::Value>) -> String {
    json!({
        "prayerTime": days,
        "status": "OK!",
        "periodType": "year",
        "lang": "ms_my",
        "zone": "WLY01",
        "bearing": "292° 29′ 7″"
    })
    .to_string()
}

pub fn reference_record(date: &str) -> DailyRecord {
    serde_json::from_value(reference_day(date)).expect("valid record")
}

/// Provider returning a fixed payload and counting calls
pub struct CountingProvider {
    pub payload: String,
    pub calls: Cell<usize>,
}

impl CountingProvider {
    pub fn new(payload: String) -> Self {
        Self {
            payload,
            calls: Cell::new(0),
        }
    }
}

impl DataProvider for CountingProvider {
    fn fetch_year(&self, _zone: &Zone, _year: i32) -> AppResult<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.payload.clone())
    }
}

/// Provider that always fails
pub struct FailingProvider;

impl DataProvider for FailingProvider {
    fn fetch_year(&self, _zone: &Zone, _year: i32) -> AppResult<String> {
        Err(AppError::ProviderUnavailable("connection refused".into()))
    }
}

/// Drop a payload straight into a cache directory
pub fn seed_cache(dir: &PathBuf, zone: &str, year: i32, payload: &str) {
    fs::write(dir.join(format!("{}-{}.json", zone, year)), payload).expect("seed cache");
}
