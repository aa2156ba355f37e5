pub mod event_match;
pub mod ingest;
pub mod rating;

use crate::error::CoreError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

pub use event_match::{confirm_event_identity, match_event_names};
pub use rating::normalize_rating;

/// Historical per-golfer prize money for a finished event, used only by the
/// first-place tie-breaker.
#[async_trait]
pub trait HistoricalStatsClient: Send + Sync {
    async fn golfer_earnings(
        &self,
        event_id: i32,
        year: i32,
    ) -> Result<HashMap<i64, f64>, CoreError>;
}

/// Default client against the ESPN historical leaderboard endpoint.
pub struct EspnStatsClient {
    client: reqwest::Client,
    base_url: String,
}

const ESPN_GOLF_API: &str = "https://site.web.api.espn.com/apis/site/v2/sports/golf/pga";
const STATS_TIMEOUT_SECS: u64 = 10;

impl EspnStatsClient {
    /// # Errors
    ///
    /// Will return `Err` if the underlying http client cannot be built.
    pub fn new() -> Result<Self, CoreError> {
        Self::with_base_url(ESPN_GOLF_API)
    }

    /// # Errors
    ///
    /// Will return `Err` if the underlying http client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(STATS_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl HistoricalStatsClient for EspnStatsClient {
    async fn golfer_earnings(
        &self,
        event_id: i32,
        year: i32,
    ) -> Result<HashMap<i64, f64>, CoreError> {
        let url = format!(
            "{}/leaderboard?event={event_id}&season={year}",
            self.base_url
        );
        let resp = self.client.get(&url).send().await?;
        let json: Value = resp.json().await?;
        Ok(parse_earnings(&json))
    }
}

/// Pull `(athlete id, earnings)` pairs out of the leaderboard payload,
/// skipping competitors with no posted amount.
fn parse_earnings(json: &Value) -> HashMap<i64, f64> {
    let mut earnings = HashMap::new();
    let competitors = json
        .get("events")
        .and_then(Value::as_array)
        .and_then(|events| events.first())
        .and_then(|event| event.get("competitions"))
        .and_then(Value::as_array)
        .and_then(|comps| comps.first())
        .and_then(|comp| comp.get("competitors"))
        .and_then(Value::as_array);

    let Some(competitors) = competitors else {
        return earnings;
    };

    for competitor in competitors {
        let athlete_id = competitor
            .get("athlete")
            .and_then(|a| a.get("id"))
            .and_then(|id| match id {
                Value::String(s) => s.parse::<i64>().ok(),
                other => other.as_i64(),
            });
        let amount = competitor
            .get("earnings")
            .or_else(|| competitor.get("amount"))
            .and_then(Value::as_f64);

        if let (Some(id), Some(amount)) = (athlete_id, amount) {
            earnings.insert(id, amount);
        }
    }

    earnings
}
