use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::reminder_controller::ReminderController;
use crate::dto::reminder_dto::{AcknowledgeReminderRequest, AcknowledgeReminderResponse, ReminderListResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reminder_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reminders))
        .route("/acknowledge", post(acknowledge_reminder))
}

async fn list_reminders(
    State(state): State<AppState>,
) -> Result<Json<ReminderListResponse>, AppError> {
    let controller = ReminderController::new(state.reminder_service());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn acknowledge_reminder(
    State(state): State<AppState>,
    Json(request): Json<AcknowledgeReminderRequest>,
) -> Result<Json<ApiResponse<AcknowledgeReminderResponse>>, AppError> {
    let controller = ReminderController::new(state.reminder_service());
    let response = controller.acknowledge(request).await?;
    Ok(Json(response))
}
