use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use healthtracker_backend::app;

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn send_get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn symptom_body(name: &str, severity: u8, timestamp: &str) -> Value {
    json!({ "name": name, "severity": severity, "timestamp": timestamp })
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = app();
    let (status, _) = send_get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn log_then_list_symptoms() {
    let app = app();
    let (status, created) = send_json(
        &app,
        "POST",
        "/symptom",
        symptom_body("Headache", 5, "2026-03-02T09:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Headache");
    assert!(created["id"].is_string());

    let (status, listed) = send_get(&app, "/symptom/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_severity_is_rejected() {
    let app = app();
    let (status, _) = send_json(
        &app,
        "POST",
        "/symptom",
        symptom_body("Headache", 11, "2026-03-02T09:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, listed) = send_get(&app, "/symptom/all").await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_symptom_by_id() {
    let app = app();
    let (_, created) = send_json(
        &app,
        "POST",
        "/symptom",
        symptom_body("Headache", 5, "2026-03-02T09:00:00Z"),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/symptom/{id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (_, listed) = send_get(&app, "/symptom/all").await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_unknown_symptom_is_404() {
    let app = app();
    let request = Request::builder()
        .method("DELETE")
        .uri("/symptom/00000000-0000-0000-0000-000000000000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trends_on_empty_store_is_404() {
    let app = app();
    let (status, _) = send_get(&app, "/trends").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trends_reflect_logged_symptoms() {
    let app = app();
    for _ in 0..3 {
        send_json(
            &app,
            "POST",
            "/symptom",
            symptom_body("Headache", 5, "2026-03-02T09:00:00Z"),
        )
        .await;
    }
    send_json(
        &app,
        "POST",
        "/symptom",
        symptom_body("Fever", 9, "2026-03-03T14:00:00Z"),
    )
    .await;

    let (status, trends) = send_get(&app, "/trends").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trends["average_severity"], 6.0);
    assert_eq!(trends["most_frequent_symptom"], "Headache");
    assert_eq!(trends["peak_times"], json!([9, 14]));
    // 2026-03-02 is a Monday, 03-03 a Tuesday
    assert_eq!(trends["weekly_pattern"]["Monday"], 3);
    assert_eq!(trends["weekly_pattern"]["Tuesday"], 1);
    assert_eq!(trends["weekly_pattern"]["Sunday"], 0);
}

#[tokio::test]
async fn symptoms_grouped_by_date() {
    let app = app();
    send_json(
        &app,
        "POST",
        "/symptom",
        symptom_body("Headache", 5, "2026-03-02T09:00:00Z"),
    )
    .await;
    send_json(
        &app,
        "POST",
        "/symptom",
        symptom_body("Nausea", 4, "2026-03-02T20:00:00Z"),
    )
    .await;
    send_json(
        &app,
        "POST",
        "/symptom",
        symptom_body("Fever", 6, "2026-03-05T10:00:00Z"),
    )
    .await;

    let (status, grouped) = send_get(&app, "/symptoms").await;
    assert_eq!(status, StatusCode::OK);
    let groups = grouped.as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["logged_at"], "2026-03-02");
    assert_eq!(groups[0]["symptoms"], json!(["Headache", "Nausea"]));
    assert_eq!(groups[1]["logged_at"], "2026-03-05");
}

#[tokio::test]
async fn emergency_endpoint_filters_by_severity() {
    let app = app();
    send_json(
        &app,
        "POST",
        "/symptom",
        symptom_body("Headache", 5, "2026-03-02T09:00:00Z"),
    )
    .await;
    send_json(
        &app,
        "POST",
        "/symptom",
        symptom_body("Chest pain", 9, "2026-03-02T10:00:00Z"),
    )
    .await;

    let (status, emergencies) = send_get(&app, "/symptom/emergency").await;
    assert_eq!(status, StatusCode::OK);
    let list = emergencies.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Chest pain");
}

fn tracker_entry(name: &str, timestamp: &str, duration_minutes: i64, triggers: Value) -> Value {
    json!({
        "name": name,
        "severity": 6,
        "timestamp": timestamp,
        "body_location": "head",
        "characteristics": ["throbbing"],
        "triggers": triggers,
        "duration_minutes": duration_minutes,
    })
}

#[tokio::test]
async fn tracker_entry_returns_recomputed_pattern() {
    let app = app();
    send_json(
        &app,
        "POST",
        "/tracker/entry",
        tracker_entry("Headache", "2026-03-02T09:00:00Z", 30, json!(["stress"])),
    )
    .await;
    let (status, pattern) = send_json(
        &app,
        "POST",
        "/tracker/entry",
        tracker_entry("Headache", "2026-03-09T09:00:00Z", 60, json!(["stress", "caffeine"])),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    // 2 occurrences over exactly one week
    assert_eq!(pattern["frequency"], 2.0);
    assert_eq!(pattern["average_duration_minutes"], 45.0);
    assert_eq!(pattern["common_triggers"], json!(["stress", "caffeine"]));

    let (status, cached) = send_get(&app, "/tracker/pattern?name=Headache").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cached["frequency"], 2.0);
}

#[tokio::test]
async fn tracker_pattern_unknown_name_is_404() {
    let app = app();
    let (status, _) = send_get(&app, "/tracker/pattern?name=Vertigo").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn tracker_history_filters_by_timeframe() {
    let app = app();
    let recent = chrono::Utc::now() - chrono::Duration::days(2);
    let stale = chrono::Utc::now() - chrono::Duration::days(20);
    send_json(
        &app,
        "POST",
        "/tracker/entry",
        tracker_entry("Headache", &recent.to_rfc3339(), 30, json!([])),
    )
    .await;
    send_json(
        &app,
        "POST",
        "/tracker/entry",
        tracker_entry("Headache", &stale.to_rfc3339(), 30, json!([])),
    )
    .await;

    let (status, week) = send_get(&app, "/tracker/history?timeframe=week").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(week.as_array().unwrap().len(), 1);

    let (_, month) = send_get(&app, "/tracker/history?timeframe=month").await;
    assert_eq!(month.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn assessment_questions_are_served() {
    let app = app();
    let (status, questions) = send_get(&app, "/assessment/questions").await;
    assert_eq!(status, StatusCode::OK);
    let list = questions.as_array().unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(
        list[0]["text"],
        "How long have you been experiencing these symptoms?"
    );
    assert_eq!(list[1]["options"][3], "Very Severe");
}

#[tokio::test]
async fn assessment_scoring_sums_answer_points() {
    let app = app();
    let (status, result) = send_json(
        &app,
        "POST",
        "/assessment/score",
        json!({ "answers": ["1-3 days", "Severe", "None of the above", "Not sure", "None"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // 1 + 3 + 1 + 1 + 1
    assert_eq!(result["score"], 7);
}

#[tokio::test]
async fn assessment_rejects_incomplete_answers() {
    let app = app();
    let (status, _) = send_json(
        &app,
        "POST",
        "/assessment/score",
        json!({ "answers": ["Mild", "Moderate"] }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
