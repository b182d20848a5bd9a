use async_trait::async_trait;
use thiserror::Error;

use crate::models::{SuggestionRequest, SuggestionResponse};

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("AI_API_KEY is not set")]
    NotConfigured,

    #[error("AI request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Invalid AI response format")]
    MissingContent,

    #[error("AI output does not match the suggestion schema: {0}")]
    InvalidOutput(#[from] serde_json::Error),
}

/// Source of appointment-time suggestions.
#[async_trait]
pub trait AppointmentSuggester: Send + Sync {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, SuggestionError>;
}
