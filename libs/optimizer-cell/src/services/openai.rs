use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;

use crate::models::{SuggestionRequest, SuggestionResponse};
use crate::suggester::{AppointmentSuggester, SuggestionError};

const SYSTEM_PROMPT: &str = "You are an AI assistant that suggests optimal appointment times for new patients \
based on historical data, doctor availability, and patient preferences. \
Respond with a JSON object with exactly two fields: 'suggestedTimes' (an array of strings) \
and 'reasoning' (a string).";

/// Chat-completions client for an OpenAI-compatible endpoint.
pub struct OpenAiSuggester {
    api_key: String,
    base_url: String,
    model: String,
    http_client: Client,
}

impl OpenAiSuggester {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.ai_api_key.clone(),
            base_url: config.ai_base_url.trim_end_matches('/').to_string(),
            model: config.ai_model.clone(),
            http_client: Client::new(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

pub fn build_prompt(request: &SuggestionRequest) -> String {
    format!(
        "Consider the following information:\n\
         Patient History: {}\n\
         Doctor Availability: {}\n\
         Patient Preferences: {}\n\
         Appointment Type: {}\n\
         Appointment Duration: {} minutes\n\n\
         Based on this information, suggest a list of optimal appointment times and explain your reasoning.",
        request.patient_history,
        request.doctor_availability,
        request.patient_preferences.as_deref().unwrap_or("None stated"),
        request.appointment_type,
        request.appointment_duration,
    )
}

/// Pulls the assistant message out of a chat-completions body and parses it
/// strictly as a suggestion.
pub fn parse_completion(body: &Value) -> Result<SuggestionResponse, SuggestionError> {
    let content = body["choices"][0]["message"]["content"]
        .as_str()
        .ok_or(SuggestionError::MissingContent)?;

    Ok(serde_json::from_str(content)?)
}

#[async_trait]
impl AppointmentSuggester for OpenAiSuggester {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, SuggestionError> {
        if self.api_key.is_empty() {
            return Err(SuggestionError::NotConfigured);
        }

        debug!(
            "Requesting appointment suggestions for {} ({} min)",
            request.appointment_type, request.appointment_duration
        );

        let prompt = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_prompt(request) }
            ],
            "response_format": { "type": "json_object" },
            "temperature": 0.5
        });

        let response = self
            .http_client
            .post(self.completions_url())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&prompt)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(SuggestionError::Upstream { status, body });
        }

        let ai_response: Value = response.json().await?;
        parse_completion(&ai_response)
    }
}
