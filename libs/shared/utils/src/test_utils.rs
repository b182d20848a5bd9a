use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
};
use serde_json::{json, Value};

use shared_config::{AppConfig, AppEnvironment, IdStrategy};

pub struct TestConfig {
    pub environment: AppEnvironment,
    pub ai_api_key: String,
    pub ai_base_url: String,
    pub id_strategy: IdStrategy,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            environment: AppEnvironment::Development,
            ai_api_key: "test-ai-key".to_string(),
            ai_base_url: "http://localhost:54321/v1".to_string(),
            id_strategy: IdStrategy::Random,
        }
    }
}

impl TestConfig {
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    pub fn with_ai_base_url(mut self, url: &str) -> Self {
        self.ai_base_url = url.to_string();
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: self.environment,
            ai_api_key: self.ai_api_key.clone(),
            ai_base_url: self.ai_base_url.clone(),
            ai_model: "gpt-4o".to_string(),
            id_strategy: self.id_strategy,
            seed_sample_data: false,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("valid GET request")
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid JSON request")
}

/// Request with an arbitrary body and optional content type.
pub fn raw_request(method: Method, uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(body.to_string())).expect("valid raw request")
}

pub async fn response_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable response body");
    serde_json::from_slice(&bytes).expect("JSON response body")
}

pub struct SampleForms;

impl SampleForms {
    pub fn patient() -> Value {
        json!({
            "name": "Test User",
            "age": 40,
            "gender": "Male",
            "contact": "t@example.com",
            "address": "1 Test St"
        })
    }

    pub fn doctor() -> Value {
        json!({
            "name": "Dr. Jane Smith",
            "specialization": "Neurology",
            "department": "Neurosciences",
            "contact": "jane.smith@meditrack.com",
            "availabilityDescription": "Mondays and Thursdays, mornings only"
        })
    }

    pub fn appointment(patient_id: &str, doctor_id: &str) -> Value {
        json!({
            "patientId": patient_id,
            "doctorId": doctor_id,
            "date": "2024-08-01",
            "time": "14:30",
            "type": "Consultation",
            "notes": "Referred by GP"
        })
    }
}
