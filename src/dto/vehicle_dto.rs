use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::reminder::DeadlineStatus;
use crate::models::vehicle::Vehicle;
use crate::services::deadline_evaluator::deadline_statuses;

// Response de vehículo, con la ficha de plazos a la fecha de referencia
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub registration: String,
    pub make: String,
    pub model: String,
    pub colour: Option<String>,
    pub fuel_type: Option<String>,
    pub mot_due: NaiveDate,
    pub tax_due: NaiveDate,
    pub insurance_due: NaiveDate,
    pub mot_actioned: bool,
    pub tax_actioned: bool,
    pub insurance_actioned: bool,
    pub deadlines: Vec<DeadlineStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VehicleResponse {
    pub fn from_vehicle(vehicle: Vehicle, today: NaiveDate) -> Self {
        let deadlines = deadline_statuses(&vehicle, today);
        Self {
            id: vehicle.id,
            registration: vehicle.registration,
            make: vehicle.make,
            model: vehicle.model,
            colour: vehicle.colour,
            fuel_type: vehicle.fuel_type,
            mot_due: vehicle.mot_due,
            tax_due: vehicle.tax_due,
            insurance_due: vehicle.insurance_due,
            mot_actioned: vehicle.mot_actioned,
            tax_actioned: vehicle.tax_actioned,
            insurance_actioned: vehicle.insurance_actioned,
            deadlines,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
