// libs/doctor-cell/tests/handlers_test.rs

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use doctor_cell::seed::sample_doctors;
use doctor_cell::{doctor_routes, DoctorCellState};
use shared_database::{InMemoryRepository, Repository, View, ViewCache};
use shared_utils::test_utils::{get_request, json_request, response_json, SampleForms, TestConfig};

fn create_state() -> DoctorCellState {
    DoctorCellState {
        config: TestConfig::default().to_arc(),
        doctors: Arc::new(InMemoryRepository::with_records(sample_doctors())),
        views: Arc::new(ViewCache::new()),
    }
}

#[tokio::test]
async fn test_create_doctor_with_description() {
    let state = create_state();
    let app = doctor_routes(state.clone());

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/", &SampleForms::doctor()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    assert_eq!(json["success"], "Doctor \"Dr. Jane Smith\" added successfully.");
    assert_eq!(json["doctor"]["availability"][0]["day"], "Custom");
    assert_eq!(
        json["doctor"]["availability"][0]["times"][0],
        "Mondays and Thursdays, mornings only"
    );
    assert_eq!(json["doctor"]["avatarUrl"], "https://placehold.co/100x100.png?text=DJS");
    assert!(json["doctor"]["id"].as_str().unwrap().starts_with("D_"));

    assert_eq!(state.doctors.count().await.unwrap(), 5);
    assert!(!state.views.is_fresh(View::Doctors).await);
}

#[tokio::test]
async fn test_create_doctor_without_description_gets_default_schedule() {
    let app = doctor_routes(create_state());

    let body = json!({
        "name": "Dr. Who",
        "specialization": "Time Medicine",
        "department": "Temporal",
        "contact": "who@meditrack.com"
    });
    let json = response_json(app.oneshot(json_request(Method::POST, "/", &body)).await.unwrap()).await;

    assert_eq!(json["doctor"]["availability"][0]["day"], "Mon-Fri");
    assert_eq!(json["doctor"]["availability"][0]["times"][0], "9am-5pm (Details TBC)");
}

#[tokio::test]
async fn test_invalid_doctor_is_not_stored() {
    let state = create_state();
    let app = doctor_routes(state.clone());

    let body = json!({
        "name": "Dr. Who",
        "specialization": "TM",
        "department": "Temporal",
        "contact": "who@meditrack.com",
        "availabilityDescription": "Tuesdays"
    });
    let response = app.oneshot(json_request(Method::POST, "/", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["errors"]["specialization"][0], "Specialization is required.");
    assert_eq!(
        json["errors"]["availabilityDescription"][0],
        "Please provide a brief description of availability."
    );
    assert_eq!(state.doctors.count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_list_and_search_doctors() {
    let app = doctor_routes(create_state());

    let all = response_json(app.clone().oneshot(get_request("/")).await.unwrap()).await;
    assert_eq!(all["total"], 4);
    assert_eq!(all["doctors"][0]["name"], "Dr. Eleanor Rigby");

    let found = response_json(app.oneshot(get_request("/?search=pediat")).await.unwrap()).await;
    assert_eq!(found["total"], 1);
    assert_eq!(found["doctors"][0]["id"], "D004");
}

#[tokio::test]
async fn test_get_doctor() {
    let app = doctor_routes(create_state());

    let json = response_json(app.clone().oneshot(get_request("/D002")).await.unwrap()).await;
    assert_eq!(json["department"], "Internal Medicine");
    assert_eq!(json["availability"][0]["times"][1], "3pm-6pm");

    let missing = app.oneshot(get_request("/D404")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
