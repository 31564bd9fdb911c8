use axum::{
    Router,
    routing::{get, post, delete},
    extract::{State, Path, Query},
    Json,
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use std::collections::BTreeMap;
use crate::models::Symptom;
use crate::store::SymptomStore;

#[derive(Deserialize)]
pub struct NewSymptom {
    pub name: String,
    pub severity: u8,
    pub timestamp: Option<DateTime<Utc>>,
    pub body_location: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub associated_symptoms: Vec<String>,
    #[serde(default)]
    pub is_recurring: bool,
}

#[derive(Serialize)]
pub struct SymptomsByDate {
    pub logged_at: NaiveDate,
    pub symptoms: Vec<String>,
}

#[derive(Deserialize)]
struct HistoryQuery {
    days: i64,
}

pub fn routes(store: SymptomStore) -> Router {
    Router::new()
        .route("/symptom", post(log_symptom))         // create
        .route("/symptom/:id", delete(delete_symptom))
        .route("/symptoms", get(get_symptoms_grouped))
        .route("/symptom/all", get(get_symptoms_flat))
        .route("/symptom/history", get(get_symptom_history))
        .route("/symptom/emergency", get(get_emergency_symptoms))
        .with_state(store)
}

async fn log_symptom(
    State(store): State<SymptomStore>,
    Json(body): Json<NewSymptom>,
) -> Result<(StatusCode, Json<Symptom>), (StatusCode, String)> {
    let mut symptom =
        Symptom::new(body.name, body.severity, body.timestamp).map_err(|e| {
            tracing::error!("❌ Rejected symptom entry: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        })?;
    symptom.body_location = body.body_location;
    symptom.description = body.description;
    symptom.duration_minutes = body.duration_minutes;
    symptom.associated_symptoms = body.associated_symptoms;
    symptom.is_recurring = body.is_recurring;

    if symptom.is_emergency() {
        tracing::warn!(
            "🚨 Emergency symptom logged: {} (severity {})",
            symptom.name,
            symptom.severity
        );
    }

    store.add(symptom.clone()).await;
    Ok((StatusCode::CREATED, Json(symptom)))
}

async fn delete_symptom(
    State(store): State<SymptomStore>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    if store.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "No symptom found".into()))
    }
}

async fn get_symptoms_flat(State(store): State<SymptomStore>) -> Json<Vec<Symptom>> {
    Json(store.all().await)
}

async fn get_symptom_history(
    State(store): State<SymptomStore>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<Symptom>> {
    Json(store.history(query.days).await)
}

async fn get_emergency_symptoms(State(store): State<SymptomStore>) -> Json<Vec<Symptom>> {
    Json(store.emergency().await)
}

async fn get_symptoms_grouped(State(store): State<SymptomStore>) -> Json<Vec<SymptomsByDate>> {
    let mut map = BTreeMap::<NaiveDate, Vec<String>>::new();
    for symptom in store.snapshot().await {
        map.entry(symptom.timestamp.date_naive())
            .or_default()
            .push(symptom.name);
    }

    let result: Vec<SymptomsByDate> = map
        .into_iter()
        .map(|(logged_at, symptoms)| SymptomsByDate { logged_at, symptoms })
        .collect();

    Json(result)
}
