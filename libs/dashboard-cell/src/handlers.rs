use axum::{extract::State, Json};
use serde_json::Value;

use shared_models::AppError;

use crate::router::DashboardCellState;
use crate::services::DashboardService;

#[axum::debug_handler]
pub async fn get_dashboard(State(state): State<DashboardCellState>) -> Result<Json<Value>, AppError> {
    let dashboard_service = DashboardService::new(&state);

    Ok(Json(dashboard_service.dashboard_view().await?))
}
