//! corona-zahlen.org API client
//!
//! Fetches the national statistics document from the public
//! Robert Koch-Institut mirror at api.corona-zahlen.org. Only the death
//! count and the last-update timestamp are consumed; everything else in the
//! payload is ignored. One plain GET per call: no caching, no retries.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("corona-city/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Corona API client errors
#[derive(Debug, Error)]
pub enum CoronaError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Subset of the `/germany` payload consumed by this program
#[derive(Debug, Clone, Deserialize)]
pub struct GermanyStats {
    /// National death count
    pub deaths: u64,
    /// Payload metadata
    pub meta: StatsMeta,
}

/// Payload metadata block
#[derive(Debug, Clone, Deserialize)]
pub struct StatsMeta {
    /// Timestamp of the last upstream data refresh
    #[serde(rename = "lastUpdate")]
    pub last_update: DateTime<Utc>,
}

impl GermanyStats {
    /// Calendar date of the last upstream update, `YYYY-MM-DD`
    pub fn last_update_date(&self) -> String {
        self.meta.last_update.format("%Y-%m-%d").to_string()
    }
}

/// Source of national statistics
///
/// Handlers depend on this trait rather than on the HTTP client so tests
/// can substitute a fixed payload.
#[async_trait::async_trait]
pub trait StatsProvider: Send + Sync {
    async fn fetch_germany(&self) -> Result<GermanyStats, CoronaError>;
}

/// HTTP-backed statistics source
pub struct CoronaClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CoronaClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CoronaError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CoronaError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait::async_trait]
impl StatsProvider for CoronaClient {
    async fn fetch_germany(&self) -> Result<GermanyStats, CoronaError> {
        let url = format!("{}/germany", self.base_url);

        tracing::debug!(url = %url, "Querying corona-zahlen API");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CoronaError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoronaError::Api(status.as_u16(), error_text));
        }

        let stats: GermanyStats = response
            .json()
            .await
            .map_err(|e| CoronaError::Parse(e.to_string()))?;

        tracing::info!(
            deaths = stats.deaths,
            last_update = %stats.meta.last_update,
            "Retrieved national statistics"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shape of a real /germany response, trimmed to representative fields
    const GERMANY_FIXTURE: &str = r#"{
        "cases": 2100618,
        "deaths": 50642,
        "recovered": 1790363,
        "weekIncidence": 115.2,
        "casesPer100k": 2526.0,
        "casesPerWeek": 95789,
        "delta": { "cases": 17862, "deaths": 859, "recovered": 20872 },
        "r": { "value": 0.91, "date": "2021-01-16T00:00:00.000Z" },
        "meta": {
            "source": "Robert Koch-Institut",
            "contact": "Marlon Lueckert (m.lueckert@me.com)",
            "info": "https://github.com/marlon360/rki-covid-api",
            "lastUpdate": "2021-01-21T00:00:00.000Z",
            "lastCheckedForUpdate": "2021-01-21T14:22:41.079Z"
        }
    }"#;

    #[test]
    fn deserializes_germany_payload() {
        let stats: GermanyStats = serde_json::from_str(GERMANY_FIXTURE).unwrap();
        assert_eq!(stats.deaths, 50_642);
        assert_eq!(
            stats.meta.last_update,
            "2021-01-21T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn last_update_reduces_to_calendar_date() {
        let stats: GermanyStats = serde_json::from_str(GERMANY_FIXTURE).unwrap();
        assert_eq!(stats.last_update_date(), "2021-01-21");
    }

    #[test]
    fn missing_deaths_is_a_parse_failure() {
        let result = serde_json::from_str::<GermanyStats>(r#"{"meta": {"lastUpdate": "2021-01-21T00:00:00.000Z"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn client_creation() {
        assert!(CoronaClient::new("https://api.corona-zahlen.org").is_ok());
    }
}
