use uuid::Uuid;

use crate::dto::reminder_dto::{AcknowledgeReminderRequest, AcknowledgeReminderResponse, ReminderListResponse};
use crate::dto::ApiResponse;
use crate::models::compliance::ComplianceCategory;
use crate::services::ReminderService;
use crate::utils::errors::AppError;

pub struct ReminderController {
    service: ReminderService,
}

impl ReminderController {
    pub fn new(service: ReminderService) -> Self {
        Self { service }
    }

    pub async fn list(&self) -> Result<ReminderListResponse, AppError> {
        let report = self.service.upcoming_reminders().await?;
        Ok(ReminderListResponse::from(report))
    }

    pub async fn acknowledge(
        &self,
        request: AcknowledgeReminderRequest,
    ) -> Result<ApiResponse<AcknowledgeReminderResponse>, AppError> {
        self.acknowledge_category(request.vehicle_id, request.category).await
    }

    pub async fn acknowledge_category(
        &self,
        vehicle_id: Uuid,
        category: ComplianceCategory,
    ) -> Result<ApiResponse<AcknowledgeReminderResponse>, AppError> {
        self.service.acknowledge(vehicle_id, category).await?;

        let response = AcknowledgeReminderResponse {
            vehicle_id,
            category,
            action_field: category.action_field(),
        };
        Ok(ApiResponse::success_with_message(
            response,
            format!("{} reminder marked as actioned", category),
        ))
    }
}
