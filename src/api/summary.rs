//! Summary endpoint: the data behind the display page
//!
//! Fetches the national statistics, resolves the comparable city, and hands
//! the page everything it needs to fill its slots in one round trip.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::cities;
use crate::error::ApiResult;
use crate::AppState;

/// Display payload for the front page
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// National death count
    pub deaths: u64,
    /// Most populous city whose population the count reaches, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Population of the resolved city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_population: Option<u64>,
    /// Calendar date of the last upstream update (YYYY-MM-DD)
    pub last_update: String,
    /// Image for the resolved city, when a provider supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// GET /api/summary
///
/// Upstream failures surface as a 502 error envelope so the page can show
/// its data-unavailable state instead of stale or fabricated numbers.
pub async fn get_summary(State(state): State<AppState>) -> ApiResult<Json<SummaryResponse>> {
    let stats = match state.stats.fetch_germany().await {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(error = %err, "Statistics fetch failed");
            *state.last_error.write().await = Some(err.to_string());
            return Err(err.into());
        }
    };

    let city = cities::find_city(stats.deaths);

    match city {
        Some(city) => {
            tracing::info!(deaths = stats.deaths, city = city.name, "Resolved comparable city")
        }
        None => tracing::info!(
            deaths = stats.deaths,
            "Death count below smallest reference city"
        ),
    }

    let image_url = match city {
        Some(city) => state.images.find_image(city.name).await,
        None => None,
    };

    Ok(Json(SummaryResponse {
        deaths: stats.deaths,
        city: city.map(|c| c.name.to_string()),
        city_population: city.map(|c| c.population),
        last_update: stats.last_update_date(),
        image_url,
    }))
}

/// Build summary routes
pub fn summary_routes() -> Router<AppState> {
    Router::new().route("/api/summary", get(get_summary))
}
