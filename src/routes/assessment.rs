use axum::{
    Router,
    routing::{get, post},
    Json,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::triage::{self, Question};

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<String>,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub score: u32,
}

pub fn routes() -> Router {
    Router::new()
        .route("/assessment/questions", get(get_questions))
        .route("/assessment/score", post(score_assessment))
}

async fn get_questions() -> Json<Vec<Question>> {
    Json(triage::QUESTIONS.to_vec())
}

async fn score_assessment(
    Json(body): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, (StatusCode, String)> {
    let score = triage::score_answers(&body.answers).map_err(|e| {
        tracing::error!("❌ Rejected assessment: {}", e);
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;
    Ok(Json(ScoreResponse { score }))
}
