use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::VehicleResponse;
use crate::dto::ApiResponse;
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::repositories::VehicleStore;
use crate::services::Clock;
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleController {
    store: Arc<dyn VehicleStore>,
    clock: Arc<dyn Clock>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn VehicleStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        if request.registration.trim().is_empty() {
            return Err(AppError::BadRequest("Registration is required".to_string()));
        }

        let vehicle = self.store.create_vehicle(request).await?;
        let registration = vehicle.registration.clone();
        let response = VehicleResponse::from_vehicle(vehicle, self.clock.today());

        Ok(ApiResponse::success_with_message(
            response,
            format!("Vehicle {} added", registration),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .store
            .find_vehicle(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(VehicleResponse::from_vehicle(vehicle, self.clock.today()))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<VehicleResponse>>, AppError> {
        let today = self.clock.today();
        let vehicles = self.store.list_vehicles().await?;

        let response = vehicles
            .into_iter()
            .map(|v| VehicleResponse::from_vehicle(v, today))
            .collect();

        Ok(ApiResponse::success(response))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = self.store.update_vehicle(id, request).await?;
        let registration = vehicle.registration.clone();
        let response = VehicleResponse::from_vehicle(vehicle, self.clock.today());

        Ok(ApiResponse::success_with_message(
            response,
            format!("Vehicle {} updated", registration),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.store.delete_vehicle(id).await?;
        Ok(ApiResponse::message(format!("Vehicle {} deleted", id)))
    }
}
