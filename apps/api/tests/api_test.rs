// apps/api/tests/api_test.rs

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use axum::{routing::get, Router};
use regex::Regex;
use tower::ServiceExt;

use meditrack_api::panic::panic_boundary;
use meditrack_api::{create_router, AppState};
use optimizer_cell::{AppointmentSuggester, SuggestionError, SuggestionRequest, SuggestionResponse};
use shared_config::{AppEnvironment, IdStrategy};
use shared_utils::test_utils::{get_request, json_request, response_json, SampleForms, TestConfig};

struct FixedSuggester;

#[async_trait]
impl AppointmentSuggester for FixedSuggester {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, SuggestionError> {
        Ok(SuggestionResponse {
            suggested_times: vec![format!("Monday 2:00 PM ({} min)", request.appointment_duration)],
            reasoning: "Afternoons are quiet.".to_string(),
        })
    }
}

fn seeded_app(strategy: IdStrategy) -> Router {
    let mut config = TestConfig::default().with_id_strategy(strategy).to_app_config();
    config.seed_sample_data = true;

    create_router(AppState::with_suggester(config, Arc::new(FixedSuggester)))
}

#[tokio::test]
async fn test_liveness() {
    let app = seeded_app(IdStrategy::Random);

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_new_patient_shows_up_everywhere() {
    let app = seeded_app(IdStrategy::Timestamp);

    let dashboard = response_json(app.clone().oneshot(get_request("/dashboard")).await.unwrap()).await;
    assert_eq!(dashboard["totalPatients"], 5);

    let created = response_json(
        app.clone()
            .oneshot(json_request(Method::POST, "/patients", &SampleForms::patient()))
            .await
            .unwrap(),
    )
    .await;
    let patient_id = created["patient"]["id"].as_str().unwrap().to_string();
    assert!(Regex::new(r"^P_SIM_\d{5}$").unwrap().is_match(&patient_id));

    let dashboard = response_json(app.clone().oneshot(get_request("/dashboard")).await.unwrap()).await;
    assert_eq!(dashboard["totalPatients"], 6);

    let booked = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/appointments",
            &SampleForms::appointment(&patient_id, "D001"),
        ))
        .await
        .unwrap();
    assert_eq!(booked.status(), StatusCode::CREATED);
    let booked = response_json(booked).await;
    assert_eq!(booked["appointment"]["patientName"], "Test User");

    let dashboard = response_json(app.oneshot(get_request("/dashboard")).await.unwrap()).await;
    assert_eq!(dashboard["upcomingAppointments"], 4);
    assert_eq!(dashboard["recentAppointments"][0]["patientId"], patient_id.as_str());
}

#[tokio::test]
async fn test_unseeded_store_starts_empty() {
    let config = TestConfig::default().to_app_config();
    let app = create_router(AppState::with_suggester(config, Arc::new(FixedSuggester)));

    let patients = response_json(app.oneshot(get_request("/patients")).await.unwrap()).await;
    assert_eq!(patients["total"], 0);
}

#[tokio::test]
async fn test_optimizer_routes_are_mounted() {
    let app = seeded_app(IdStrategy::Random);

    let defaults = response_json(app.clone().oneshot(get_request("/optimizer/defaults")).await.unwrap()).await;
    let response = app
        .oneshot(json_request(Method::POST, "/optimizer/suggestions", &defaults))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["suggestedTimes"][0], "Monday 2:00 PM (45 min)");
}

async fn boom() -> &'static str {
    panic!("ledger exploded")
}

fn panicking_app(environment: AppEnvironment) -> Router {
    let mut config = TestConfig::default().to_app_config();
    config.environment = environment;

    Router::new()
        .route("/boom", get(boom))
        .layer(panic_boundary(&config))
}

#[tokio::test]
async fn test_panic_detail_in_development() {
    let response = panicking_app(AppEnvironment::Development)
        .oneshot(get_request("/boom"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    assert_eq!(json["error"], "Oops! Something went wrong.");
    assert_eq!(json["detail"], "ledger exploded");
}

#[tokio::test]
async fn test_panic_detail_hidden_in_production() {
    let response = panicking_app(AppEnvironment::Production)
        .oneshot(get_request("/boom"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    assert_eq!(json["error"], "Oops! Something went wrong.");
    assert!(json.get("detail").is_none());
}
