//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! Mapea exactamente a la tabla `vehicles` con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::compliance::ComplianceCategory;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Construir un vehículo nuevo a partir de la request; los flags empiezan en false
    pub fn from_request(request: CreateVehicleRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            registration: request.registration,
            make: request.make,
            model: request.model,
            colour: request.colour,
            fuel_type: request.fuel_type,
            mot_due: request.mot_due,
            tax_due: request.tax_due,
            insurance_due: request.insurance_due,
            mot_actioned: false,
            tax_actioned: false,
            insurance_actioned: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Etiqueta para mostrar: "AB12CDE (Ford Transit)"
    pub fn display_label(&self) -> String {
        format!("{} ({} {})", self.registration, self.make, self.model)
    }

    pub fn due_date(&self, category: ComplianceCategory) -> NaiveDate {
        match category {
            ComplianceCategory::Mot => self.mot_due,
            ComplianceCategory::Tax => self.tax_due,
            ComplianceCategory::Insurance => self.insurance_due,
        }
    }

    pub fn is_actioned(&self, category: ComplianceCategory) -> bool {
        match category {
            ComplianceCategory::Mot => self.mot_actioned,
            ComplianceCategory::Tax => self.tax_actioned,
            ComplianceCategory::Insurance => self.insurance_actioned,
        }
    }

    pub fn set_actioned(&mut self, category: ComplianceCategory, value: bool) {
        match category {
            ComplianceCategory::Mot => self.mot_actioned = value,
            ComplianceCategory::Tax => self.tax_actioned = value,
            ComplianceCategory::Insurance => self.insurance_actioned = value,
        }
    }

    fn set_due_date(&mut self, category: ComplianceCategory, due: NaiveDate) {
        match category {
            ComplianceCategory::Mot => self.mot_due = due,
            ComplianceCategory::Tax => self.tax_due = due,
            ComplianceCategory::Insurance => self.insurance_due = due,
        }
    }

    /// Aplicar una actualización parcial
    ///
    /// Si cambia la fecha de vencimiento de una categoría, su flag `actioned`
    /// vuelve a false en la misma escritura; en ese caso se ignora cualquier
    /// valor de `actioned` que venga en la request para esa categoría.
    pub fn apply_update(&mut self, update: UpdateVehicleRequest, now: DateTime<Utc>) {
        for category in ComplianceCategory::ALL {
            let renewed = match update.due_date(category) {
                Some(due) if due != self.due_date(category) => {
                    self.set_due_date(category, due);
                    true
                }
                _ => false,
            };

            if renewed {
                self.set_actioned(category, false);
            } else if let Some(actioned) = update.actioned(category) {
                self.set_actioned(category, actioned);
            }
        }

        if let Some(registration) = update.registration {
            self.registration = registration;
        }
        if let Some(make) = update.make {
            self.make = make;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if update.colour.is_some() {
            self.colour = update.colour;
        }
        if update.fuel_type.is_some() {
            self.fuel_type = update.fuel_type;
        }
        self.updated_at = now;
    }
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 20))]
    pub registration: String,

    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(max = 50))]
    pub colour: Option<String>,

    #[validate(length(max = 50))]
    pub fuel_type: Option<String>,

    pub mot_due: NaiveDate,
    pub tax_due: NaiveDate,
    pub insurance_due: NaiveDate,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 20))]
    pub registration: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(length(max = 50))]
    pub colour: Option<String>,

    #[validate(length(max = 50))]
    pub fuel_type: Option<String>,

    pub mot_due: Option<NaiveDate>,
    pub tax_due: Option<NaiveDate>,
    pub insurance_due: Option<NaiveDate>,

    pub mot_actioned: Option<bool>,
    pub tax_actioned: Option<bool>,
    pub insurance_actioned: Option<bool>,
}

impl UpdateVehicleRequest {
    fn due_date(&self, category: ComplianceCategory) -> Option<NaiveDate> {
        match category {
            ComplianceCategory::Mot => self.mot_due,
            ComplianceCategory::Tax => self.tax_due,
            ComplianceCategory::Insurance => self.insurance_due,
        }
    }

    fn actioned(&self, category: ComplianceCategory) -> Option<bool> {
        match category {
            ComplianceCategory::Mot => self.mot_actioned,
            ComplianceCategory::Tax => self.tax_actioned,
            ComplianceCategory::Insurance => self.insurance_actioned,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub(crate) fn sample_vehicle(registration: &str) -> Vehicle {
        Vehicle::from_request(
            CreateVehicleRequest {
                registration: registration.to_string(),
                make: "Ford".to_string(),
                model: "Transit".to_string(),
                colour: Some("White".to_string()),
                fuel_type: Some("Diesel".to_string()),
                mot_due: date("2026-06-01"),
                tax_due: date("2026-06-01"),
                insurance_due: date("2026-06-01"),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_display_label() {
        let vehicle = sample_vehicle("AB12CDE");
        assert_eq!(vehicle.display_label(), "AB12CDE (Ford Transit)");
    }

    #[test]
    fn test_new_vehicle_starts_unactioned() {
        let vehicle = sample_vehicle("AB12CDE");
        for category in ComplianceCategory::ALL {
            assert!(!vehicle.is_actioned(category));
        }
    }

    #[test]
    fn test_renewed_due_date_resets_actioned() {
        let mut vehicle = sample_vehicle("AB12CDE");
        vehicle.set_actioned(ComplianceCategory::Mot, true);
        vehicle.set_actioned(ComplianceCategory::Tax, true);

        vehicle.apply_update(
            UpdateVehicleRequest {
                mot_due: Some(date("2027-06-01")),
                ..Default::default()
            },
            Utc::now(),
        );

        assert_eq!(vehicle.mot_due, date("2027-06-01"));
        assert!(!vehicle.mot_actioned);
        // Tax no se tocó
        assert!(vehicle.tax_actioned);
    }

    #[test]
    fn test_same_due_date_keeps_actioned() {
        let mut vehicle = sample_vehicle("AB12CDE");
        vehicle.set_actioned(ComplianceCategory::Insurance, true);

        vehicle.apply_update(
            UpdateVehicleRequest {
                insurance_due: Some(date("2026-06-01")),
                make: Some("Vauxhall".to_string()),
                ..Default::default()
            },
            Utc::now(),
        );

        assert!(vehicle.insurance_actioned);
        assert_eq!(vehicle.make, "Vauxhall");
    }

    #[test]
    fn test_renewal_wins_over_explicit_actioned() {
        let mut vehicle = sample_vehicle("AB12CDE");
        vehicle.set_actioned(ComplianceCategory::Tax, true);

        vehicle.apply_update(
            UpdateVehicleRequest {
                tax_due: Some(date("2027-01-01")),
                tax_actioned: Some(true),
                ..Default::default()
            },
            Utc::now(),
        );

        assert!(!vehicle.tax_actioned);
    }

    #[test]
    fn test_create_request_validation() {
        let request = CreateVehicleRequest {
            registration: "A".to_string(),
            make: "Ford".to_string(),
            model: "Transit".to_string(),
            colour: None,
            fuel_type: None,
            mot_due: date("2026-01-01"),
            tax_due: date("2026-01-01"),
            insurance_due: date("2026-01-01"),
        };
        assert!(request.validate().is_err());
    }
}
