use axum::{routing::get, Router};

pub mod analytics;
pub mod models;
pub mod routes;
pub mod store;
pub mod tracker;
pub mod triage;

use store::SymptomStore;
use tracker::TrackerStore;

/// Full application router with fresh in-memory state.
/// Also used by the integration tests to drive requests in-process.
pub fn app() -> Router {
    let store = SymptomStore::new();
    let tracker = TrackerStore::new();

    Router::new()
        .merge(routes::symptoms::routes(store.clone()))
        .merge(routes::trends::routes(store))
        .merge(routes::tracker::routes(tracker))
        .merge(routes::assessment::routes())
        .route("/health", get(|| async { "✅ Backend up" }))
}
