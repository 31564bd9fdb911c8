use axum::{
    Router,
    routing::{get, post},
    extract::{State, Query},
    Json,
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::validate_entry;
use crate::tracker::{
    BodyLocation, EnhancedSymptom, SymptomCharacteristic, SymptomPattern, TimeFrame, TrackerStore,
};

#[derive(Deserialize)]
pub struct NewTrackerEntry {
    pub name: String,
    pub severity: u8,
    pub timestamp: Option<DateTime<Utc>>,
    pub body_location: BodyLocation,
    #[serde(default)]
    pub characteristics: Vec<SymptomCharacteristic>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub relief_factors: Vec<String>,
    pub duration_minutes: i64,
}

#[derive(Deserialize)]
struct TimeframeQuery {
    timeframe: TimeFrame,
}

#[derive(Deserialize)]
struct PatternQuery {
    name: String,
}

pub fn routes(tracker: TrackerStore) -> Router {
    Router::new()
        .route("/tracker/entry", post(add_entry))
        .route("/tracker/history", get(get_history))
        .route("/tracker/pattern", get(get_pattern))
        .with_state(tracker)
}

async fn add_entry(
    State(tracker): State<TrackerStore>,
    Json(body): Json<NewTrackerEntry>,
) -> Result<(StatusCode, Json<SymptomPattern>), (StatusCode, String)> {
    validate_entry(&body.name, body.severity).map_err(|e| {
        tracing::error!("❌ Rejected tracker entry: {}", e);
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    let entry = EnhancedSymptom {
        id: Uuid::new_v4(),
        name: body.name,
        severity: body.severity,
        timestamp: body.timestamp.unwrap_or_else(Utc::now),
        body_location: body.body_location,
        characteristics: body.characteristics,
        triggers: body.triggers,
        relief_factors: body.relief_factors,
        duration_minutes: body.duration_minutes,
    };
    let pattern = tracker.add_entry(entry).await;
    Ok((StatusCode::CREATED, Json(pattern)))
}

async fn get_history(
    State(tracker): State<TrackerStore>,
    Query(query): Query<TimeframeQuery>,
) -> Json<Vec<EnhancedSymptom>> {
    Json(tracker.history(query.timeframe).await)
}

async fn get_pattern(
    State(tracker): State<TrackerStore>,
    Query(query): Query<PatternQuery>,
) -> Result<Json<SymptomPattern>, (StatusCode, String)> {
    match tracker.pattern_for(&query.name).await {
        Some(pattern) => Ok(Json(pattern)),
        None => Err((StatusCode::NOT_FOUND, "No pattern for that symptom".into())),
    }
}
