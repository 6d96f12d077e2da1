use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::reminder_controller::ReminderController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::reminder_dto::AcknowledgeReminderResponse;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::dto::ApiResponse;
use crate::models::compliance::ComplianceCategory;
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle).get(list_vehicles))
        .route("/:id", get(get_vehicle).put(update_vehicle).delete(delete_vehicle))
        .route("/:id/acknowledge/:category", post(acknowledge_category))
}

fn controller(state: &AppState) -> VehicleController {
    VehicleController::new(state.store.clone(), state.clock.clone())
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), AppError> {
    let response = controller(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<VehicleResponse>>>, AppError> {
    let response = controller(&state).list().await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let response = controller(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let response = controller(&state).delete(id).await?;
    Ok(Json(response))
}

/// Atajo por vehículo: POST /api/vehicles/:id/acknowledge/mot
async fn acknowledge_category(
    State(state): State<AppState>,
    Path((id, category)): Path<(Uuid, String)>,
) -> Result<Json<ApiResponse<AcknowledgeReminderResponse>>, AppError> {
    let category: ComplianceCategory = category.parse().map_err(AppError::BadRequest)?;
    let controller = ReminderController::new(state.reminder_service());
    let response = controller.acknowledge_category(id, category).await?;
    Ok(Json(response))
}
