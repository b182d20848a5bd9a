use axum::{extract::State, Json};
use shared_utils::FormBody;
use tracing::warn;

use crate::models::{OptimizerForm, SuggestionRequest, SuggestionResponse};
use crate::router::OptimizerCellState;
use crate::services::optimizer::OptimizerError;
use crate::services::OptimizerService;

#[axum::debug_handler]
pub async fn get_defaults(State(state): State<OptimizerCellState>) -> Json<SuggestionRequest> {
    let optimizer_service = OptimizerService::new(&state);

    Json(optimizer_service.defaults())
}

#[axum::debug_handler]
pub async fn suggest_times(
    State(state): State<OptimizerCellState>,
    FormBody(form): FormBody<OptimizerForm>,
) -> Result<Json<SuggestionResponse>, OptimizerError> {
    if !state.config.is_ai_configured() {
        warn!("Suggestion requested but AI_API_KEY is not configured");
    }

    let optimizer_service = OptimizerService::new(&state);

    let response = optimizer_service.suggest_times(form).await?;

    Ok(Json(response))
}
