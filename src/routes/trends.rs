use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::analytics::{self, SymptomTrends};
use crate::store::SymptomStore;

pub async fn get_trends(
    State(store): State<SymptomStore>,
) -> Result<Json<SymptomTrends>, StatusCode> {
    let symptoms = store.snapshot().await;
    match analytics::analyze_trends(&symptoms) {
        Some(trends) => Ok(Json(trends)),
        // nothing logged yet — no average to report
        None => Err(StatusCode::NOT_FOUND),
    }
}

pub fn routes(store: SymptomStore) -> Router {
    Router::new()
        .route("/trends", get(get_trends))
        .with_state(store)
}
