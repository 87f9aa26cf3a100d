//! Remote suppliers of a year's worth of prayer records.

pub mod esolat;

use crate::errors::AppResult;
use crate::models::Zone;

pub use esolat::EsolatProvider;

/// Returns the raw year payload for a zone, or `ProviderUnavailable`.
pub trait DataProvider {
    fn fetch_year(&self, zone: &Zone, year: i32) -> AppResult<String>;
}

impl<T: DataProvider + ?Sized> DataProvider for &T {
    fn fetch_year(&self, zone: &Zone, year: i32) -> AppResult<String> {
        (**self).fetch_year(zone, year)
    }
}
