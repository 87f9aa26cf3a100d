//! JAKIM e-Solat yearly timetable.

use crate::errors::{AppError, AppResult};
use crate::models::Zone;
use crate::provider::DataProvider;
use log::info;
use reqwest::blocking::Client;

pub const DEFAULT_PROVIDER_URL: &str = "https://www.e-solat.gov.my/index.php";

/// The HTTP client is only built when a fetch is actually needed, so a
/// cached year never depends on it.
pub struct EsolatProvider {
    base_url: String,
}

impl EsolatProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn client(&self) -> AppResult<Client> {
        Ok(Client::builder()
            .user_agent(concat!("rsolat/", env!("CARGO_PKG_VERSION")))
            .build()?)
    }
}

impl DataProvider for EsolatProvider {
    /// e-Solat's `period=year` always answers with the current year; the
    /// store rejects payloads dated in another year.
    fn fetch_year(&self, zone: &Zone, year: i32) -> AppResult<String> {
        info!("fetching {} timetable for {} from {}", year, zone, self.base_url);

        let resp = self
            .client()?
            .get(&self.base_url)
            .query(&[
                ("r", "esolatApi/takwimsolat"),
                ("period", "year"),
                ("zone", zone.as_str()),
            ])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::ProviderUnavailable(format!(
                "HTTP {} from {}",
                status, self.base_url
            )));
        }

        Ok(resp.text()?)
    }
}
