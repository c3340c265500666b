//! JSON API for plan requests
//!
//! This is the calling layer around the planner: it validates the request
//! (destination, tolerance, dates against today and the forecast window)
//! before any packing rule runs.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{ForecastConfig, TravelPackConfig};
use crate::models::weather::open_meteo::DailySeries;
use crate::models::{DailyReading, TemperatureTolerance, TripWindow};
use crate::planner::{self, TripPlan};
use crate::{TravelPackError, VERSION};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<TravelPackConfig>,
}

/// Body of `POST /plan`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanRequest {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub tolerance: String,
    /// Daily readings in the crate's own format
    #[serde(default)]
    pub readings: Option<Vec<DailyReading>>,
    /// Open-Meteo `daily` block, used when `readings` is absent
    #[serde(default)]
    pub daily: Option<DailySeries>,
}

/// A request that passed boundary validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub destination: String,
    pub tolerance: TemperatureTolerance,
    pub window: TripWindow,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub code: String,
}

/// Error wrapper turning library errors into HTTP responses
#[derive(Debug)]
pub struct ApiError(pub TravelPackError);

impl From<TravelPackError> for ApiError {
    fn from(err: TravelPackError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TravelPackError::InsufficientData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            TravelPackError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            TravelPackError::Validation { .. }
            | TravelPackError::InvalidTolerance { .. }
            | TravelPackError::InvalidTripWindow { .. }
            | TravelPackError::ForecastWindow { .. } => StatusCode::BAD_REQUEST,
        };
        let body = ApiErrorBody {
            error: self.0.user_message(),
            code: self.0.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(config: Arc<TravelPackConfig>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/plan", post(create_plan))
        .with_state(AppState { config })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "version": VERSION }))
}

async fn create_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<TripPlan>, ApiError> {
    let today = chrono::Local::now().date_naive();

    let validated = validate_request(&request, today, &state.config.forecast).inspect_err(|e| {
        warn!(destination = %request.destination, error = %e, "Rejected plan request");
    })?;

    let readings = request
        .readings
        .or_else(|| request.daily.map(DailySeries::into_readings))
        .unwrap_or_default();

    info!(
        destination = %validated.destination,
        tolerance = %validated.tolerance,
        trip_days = validated.window.trip_days(),
        readings = readings.len(),
        "Planning trip"
    );

    let plan = planner::compute_plan(
        &validated.destination,
        &readings,
        validated.tolerance,
        validated.window,
    )
    .inspect_err(|e| {
        warn!(destination = %validated.destination, error = %e, "Plan computation failed");
    })?;

    Ok(Json(plan))
}

fn parse_date(value: &str, field: &str) -> crate::Result<NaiveDate> {
    if value.trim().is_empty() {
        return Err(TravelPackError::validation(format!("{field} is required")));
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        TravelPackError::validation(format!("{field} must be a date in YYYY-MM-DD format"))
    })
}

fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn forecast_window_violation(
    start: NaiveDate,
    end: NaiveDate,
    forecast: &ForecastConfig,
) -> Option<String> {
    match (forecast.min_date, forecast.max_date) {
        (Some(min), Some(max)) if start < min || end > max => Some(format!(
            "Weather forecast is only available for dates between {} and {}. Please adjust your travel dates.",
            display_date(min),
            display_date(max)
        )),
        (Some(min), None) if start < min => Some(format!(
            "Weather forecast is only available from {}. Please adjust your travel dates.",
            display_date(min)
        )),
        (None, Some(max)) if end > max => Some(format!(
            "Weather forecast is only available until {}. Please adjust your travel dates.",
            display_date(max)
        )),
        _ => None,
    }
}

/// Check a plan request against today's date and the forecast window
pub fn validate_request(
    request: &PlanRequest,
    today: NaiveDate,
    forecast: &ForecastConfig,
) -> crate::Result<ValidatedRequest> {
    let destination = request.destination.trim();
    if destination.is_empty() {
        return Err(TravelPackError::validation("Destination is required"));
    }

    let tolerance: TemperatureTolerance = request.tolerance.parse()?;

    let start = parse_date(&request.start_date, "Start date")?;
    let end = parse_date(&request.end_date, "End date")?;

    if start < today && !forecast.allow_past_start {
        return Err(TravelPackError::validation(
            "Start date cannot be in the past",
        ));
    }

    let window = TripWindow::new(start, end)?;

    if let Some(message) = forecast_window_violation(start, end, forecast) {
        return Err(TravelPackError::forecast_window(message));
    }

    Ok(ValidatedRequest {
        destination: destination.to_string(),
        tolerance,
        window,
    })
}
