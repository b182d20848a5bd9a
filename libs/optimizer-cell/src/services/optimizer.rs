use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error, info};

use shared_models::{ActionError, AppError, FieldErrors};

use crate::models::{OptimizerForm, SuggestionRequest, SuggestionResponse};
use crate::router::OptimizerCellState;
use crate::suggester::{AppointmentSuggester, SuggestionError};

pub const SUGGESTION_FAILED_MESSAGE: &str = "Failed to generate appointment suggestions. Please try again.";

#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("Invalid data. Please check the form fields.")]
    Validation(FieldErrors),

    #[error(transparent)]
    Suggestion(#[from] SuggestionError),
}

impl IntoResponse for OptimizerError {
    fn into_response(self) -> Response {
        match self {
            OptimizerError::Validation(errors) => ActionError::Validation(errors).into_response(),
            OptimizerError::Suggestion(err) => {
                error!("Appointment suggestion failed: {}", err);
                AppError::ExternalService(SUGGESTION_FAILED_MESSAGE.to_string()).into_response()
            }
        }
    }
}

pub struct OptimizerService {
    suggester: Arc<dyn AppointmentSuggester>,
}

impl OptimizerService {
    pub fn new(state: &OptimizerCellState) -> Self {
        Self {
            suggester: state.suggester.clone(),
        }
    }

    pub fn defaults(&self) -> SuggestionRequest {
        SuggestionRequest::sample()
    }

    pub async fn suggest_times(&self, form: OptimizerForm) -> Result<SuggestionResponse, OptimizerError> {
        let request = form.validate().map_err(OptimizerError::Validation)?;

        debug!("Suggesting times for a {} min {}", request.appointment_duration, request.appointment_type);

        let response = self.suggester.suggest(&request).await?;

        info!("Received {} suggested appointment times", response.suggested_times.len());

        Ok(response)
    }
}
