//! Year-scoped cache of provider payloads.
//!
//! A bundle is fetched at most once per (zone, year). Once persisted it is
//! served as-is for the rest of the year and beyond; nothing here expires.

pub mod fs;
pub mod memory;

use crate::errors::{AppError, AppResult};
use crate::models::{Lookup, YearBundle, Zone};
use crate::provider::DataProvider;
use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use std::fmt;

pub use fs::FsStorage;
pub use memory::MemoryStorage;

/// Storage address of one year bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    pub zone: Zone,
    pub year: i32,
}

impl CacheKey {
    pub fn new(zone: Zone, year: i32) -> Self {
        Self { zone, year }
    }

    /// `WLY01-2024.json`
    pub fn file_name(&self) -> String {
        format!("{}-{}.json", self.zone, self.year)
    }

    /// Inverse of [`CacheKey::file_name`]; `None` for foreign files.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".json")?;
        let (zone, year) = stem.rsplit_once('-')?;
        let year = year.parse().ok()?;
        let zone = Zone::parse(zone).ok()?;
        Some(Self::new(zone, year))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.zone, self.year)
    }
}

/// Durable key-value backend for raw year payloads.
///
/// `write` must replace atomically: a concurrent `read` sees either the old
/// payload or the new one, never a partial write.
pub trait BundleStorage {
    fn exists(&self, key: &CacheKey) -> bool;
    fn read(&self, key: &CacheKey) -> AppResult<Option<String>>;
    fn write(&self, key: &CacheKey, payload: &str) -> AppResult<()>;
    /// Returns whether something was removed.
    fn remove(&self, key: &CacheKey) -> AppResult<bool>;
    fn keys(&self) -> AppResult<Vec<CacheKey>>;
}

pub struct DailyRecordStore<S, P> {
    storage: S,
    provider: P,
}

impl<S: BundleStorage, P: DataProvider> DailyRecordStore<S, P> {
    pub fn new(storage: S, provider: P) -> Self {
        Self { storage, provider }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Cached bundle for (zone, year), fetching and persisting it on a miss.
    pub fn get(&self, zone: &Zone, year: i32) -> AppResult<YearBundle> {
        let key = CacheKey::new(zone.clone(), year);

        if let Some(raw) = self.storage.read(&key)? {
            info!("cache hit for {}", key);
            return YearBundle::from_payload(zone.clone(), year, raw)
                .map_err(|e| AppError::CorruptCache(key.file_name(), e.to_string()));
        }

        info!("cache miss for {}", key);
        self.fetch_and_store(&key)
    }

    /// Fetch unconditionally and overwrite whatever is cached.
    pub fn refresh(&self, zone: &Zone, year: i32) -> AppResult<YearBundle> {
        self.fetch_and_store(&CacheKey::new(zone.clone(), year))
    }

    /// Today's record from the bundle of `today`'s year.
    pub fn get_today(&self, zone: &Zone, today: NaiveDate) -> AppResult<Lookup> {
        let bundle = self.get(zone, today.year())?;
        Ok(match bundle.find_day(today) {
            Some(record) => Lookup::Found(record.clone()),
            None => Lookup::NotFound,
        })
    }

    fn fetch_and_store(&self, key: &CacheKey) -> AppResult<YearBundle> {
        let raw = self.provider.fetch_year(&key.zone, key.year)?;

        let bundle = YearBundle::from_payload(key.zone.clone(), key.year, raw)
            .map_err(|e| AppError::ProviderUnavailable(format!("unparsable payload: {}", e)))?;

        if bundle.days.is_empty() {
            warn!("provider returned no days for {}", key);
        } else if !bundle.covers_year() {
            return Err(AppError::ProviderUnavailable(format!(
                "payload for {} has no dates in {}",
                key.zone, key.year
            )));
        }

        self.storage.write(key, bundle.raw())?;
        info!("cached {} days for {}", bundle.days.len(), key);
        Ok(bundle)
    }
}
