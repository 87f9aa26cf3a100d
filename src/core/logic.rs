use crate::core::resolver::{self, Rollover};
use crate::core::schedule;
use crate::errors::AppResult;
use crate::models::{Lookup, TodayView, Zone};
use crate::provider::DataProvider;
use crate::store::{BundleStorage, DailyRecordStore};
use chrono::NaiveDateTime;
use log::{error, warn};

pub struct Core;

impl Core {
    /// Full pipeline for one invocation: today's record, events, resolution.
    ///
    /// A missing day and an unreachable provider both produce a view; a
    /// malformed record is returned as an error.
    pub fn today_view<S, P>(
        store: &DailyRecordStore<S, P>,
        zone: &Zone,
        now: NaiveDateTime,
        rollover: Rollover,
    ) -> AppResult<TodayView>
    where
        S: BundleStorage,
        P: DataProvider,
    {
        let record = match store.get_today(zone, now.date()) {
            Ok(Lookup::Found(record)) => record,
            Ok(Lookup::NotFound) => {
                warn!("no prayer record for {} on {}", zone, now.date());
                return Ok(TodayView::NoData);
            }
            Err(e) if e.is_provider_failure() => {
                error!("{}", e);
                return Ok(TodayView::Unavailable(e.to_string()));
            }
            Err(e) => return Err(e),
        };

        let events = schedule::build(&record, now)?;
        Ok(TodayView::Schedule(resolver::resolve(&events, now, rollover)))
    }
}
