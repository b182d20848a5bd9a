// libs/optimizer-cell/tests/handlers_test.rs

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use mockall::mock;
use serde_json::json;
use tower::ServiceExt;

use optimizer_cell::{
    optimizer_routes, AppointmentSuggester, OptimizerCellState, SuggestionError, SuggestionRequest, SuggestionResponse,
};
use shared_utils::test_utils::{get_request, json_request, raw_request, response_json, TestConfig};

mock! {
    pub Suggester {}

    #[async_trait]
    impl AppointmentSuggester for Suggester {
        async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, SuggestionError>;
    }
}

fn create_state(suggester: MockSuggester) -> OptimizerCellState {
    OptimizerCellState {
        config: TestConfig::default().to_arc(),
        suggester: Arc::new(suggester),
    }
}

fn valid_body() -> serde_json::Value {
    json!({
        "patientHistory": "Mostly morning visits, 30 minutes each",
        "doctorAvailability": "Mon-Fri 9 AM - 5 PM, lunch 12-1",
        "appointmentType": "Follow-up",
        "appointmentDuration": "30"
    })
}

#[tokio::test]
async fn test_defaults() {
    let app = optimizer_routes(create_state(MockSuggester::new()));

    let json = response_json(app.oneshot(get_request("/defaults")).await.unwrap()).await;

    assert_eq!(json["appointmentType"], "New Patient Consultation");
    assert_eq!(json["appointmentDuration"], 45);
    assert_eq!(json["patientPreferences"], "Prefers afternoon appointments if possible.");
    assert!(json["doctorAvailability"].as_str().unwrap().contains("Dr. Jones"));
}

#[tokio::test]
async fn test_suggestions_are_returned() {
    let mut suggester = MockSuggester::new();
    suggester
        .expect_suggest()
        .withf(|request| request.appointment_duration == 30 && request.patient_preferences.is_none())
        .times(1)
        .returning(|_| {
            Ok(SuggestionResponse {
                suggested_times: vec!["Tuesday 9:30 AM".to_string()],
                reasoning: "Morning slots suit short visits.".to_string(),
            })
        });

    let app = optimizer_routes(create_state(suggester));
    let response = app
        .oneshot(json_request(Method::POST, "/suggestions", &valid_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["suggestedTimes"][0], "Tuesday 9:30 AM");
    assert_eq!(json["reasoning"], "Morning slots suit short visits.");
}

#[tokio::test]
async fn test_collaborator_failure_is_generic() {
    let mut suggester = MockSuggester::new();
    suggester.expect_suggest().returning(|_| {
        Err(SuggestionError::Upstream {
            status: 500,
            body: "model overloaded".to_string(),
        })
    });

    let app = optimizer_routes(create_state(suggester));
    let response = app
        .oneshot(json_request(Method::POST, "/suggestions", &valid_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = response_json(response).await;
    assert_eq!(json["error"], "Failed to generate appointment suggestions. Please try again.");
    assert!(!json.to_string().contains("overloaded"));
}

#[tokio::test]
async fn test_invalid_form_never_reaches_collaborator() {
    let mut suggester = MockSuggester::new();
    suggester.expect_suggest().never();

    let app = optimizer_routes(create_state(suggester));
    let body = json!({
        "patientHistory": "short",
        "doctorAvailability": "Mon-Fri 9 AM - 5 PM",
        "appointmentType": "Follow-up",
        "appointmentDuration": 0
    });
    let response = app.oneshot(json_request(Method::POST, "/suggestions", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["errors"]["patientHistory"][0], "Patient history is too short.");
    assert_eq!(json["errors"]["appointmentDuration"][0], "Duration must be a positive number.");
}

#[tokio::test]
async fn test_wrongly_typed_history_never_reaches_the_suggester() {
    let mut suggester = MockSuggester::new();
    suggester.expect_suggest().times(0);
    let app = optimizer_routes(create_state(suggester));

    let mut body = valid_body();
    body["patientHistory"] = json!(["Mon 9 AM", "Tue 2 PM"]);
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/suggestions", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["errors"]["patientHistory"][0], "Expected string, received array");

    let response = app
        .oneshot(raw_request(Method::POST, "/suggestions", Some("application/json"), "[1, 2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response_json(response).await["errors"]["_form"][0].is_string());
}
