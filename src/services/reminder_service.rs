//! Servicio de recordatorios
//!
//! Recorre todos los vehículos × categorías, se queda con los plazos
//! accionables y los ordena para mostrarlos. También expone el
//! reconocimiento (`actioned`) que silencia un plazo hasta su renovación.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::clock::Clock;
use super::deadline_evaluator::evaluate_category;
use crate::models::compliance::ComplianceCategory;
use crate::models::reminder::{Reminder, ReminderReport};
use crate::models::vehicle::Vehicle;
use crate::repositories::VehicleStore;
use crate::utils::errors::AppResult;

/// Construir la lista ordenada de recordatorios para una fecha de referencia
///
/// Función pura sobre la instantánea: misma entrada, misma salida.
pub fn collect_reminders(vehicles: &[Vehicle], today: NaiveDate) -> Vec<Reminder> {
    let mut reminders: Vec<Reminder> = vehicles
        .iter()
        .flat_map(|vehicle| {
            ComplianceCategory::ALL
                .into_iter()
                .filter_map(move |category| build_reminder(vehicle, category, today))
        })
        .collect();

    sort_reminders(&mut reminders);
    reminders
}

fn build_reminder(vehicle: &Vehicle, category: ComplianceCategory, today: NaiveDate) -> Option<Reminder> {
    let evaluation = evaluate_category(vehicle, category, today);
    if !evaluation.is_actionable(vehicle.is_actioned(category)) {
        return None;
    }

    Some(Reminder {
        vehicle_id: vehicle.id,
        vehicle: vehicle.display_label(),
        category,
        due_date: vehicle.due_date(category),
        days_until_due: evaluation.days_until_due,
        urgency: evaluation.urgency,
        action_field: category.action_field(),
    })
}

/// Vencidos (días < 0) primero, luego ascendente por días; orden estable
pub fn sort_reminders(reminders: &mut [Reminder]) {
    reminders.sort_by_key(|r| (!r.is_overdue(), r.days_until_due));
}

#[derive(Clone)]
pub struct ReminderService {
    store: Arc<dyn VehicleStore>,
    clock: Arc<dyn Clock>,
}

impl ReminderService {
    pub fn new(store: Arc<dyn VehicleStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Una pasada de agregación sobre la instantánea actual del store
    pub async fn upcoming_reminders(&self) -> AppResult<ReminderReport> {
        // Fecha capturada una vez por pasada
        let today = self.clock.today();
        let vehicles = self.store.list_vehicles().await?;
        let reminders = collect_reminders(&vehicles, today);

        debug!(
            "🔔 Agregación {}: {} vehículos, {} recordatorios",
            today,
            vehicles.len(),
            reminders.len()
        );

        Ok(ReminderReport::new(today, reminders))
    }

    /// Reconocer un plazo: pide al store que ponga el flag a true
    ///
    /// Si la escritura falla no se toca nada localmente; la siguiente pasada
    /// volverá a mostrar el plazo.
    pub async fn acknowledge(&self, vehicle_id: Uuid, category: ComplianceCategory) -> AppResult<()> {
        match self.store.set_actioned(vehicle_id, category).await {
            Ok(()) => {
                info!("✅ {} reconocido para vehículo {}", category, vehicle_id);
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ No se pudo reconocer {} para vehículo {}: {}", category, vehicle_id, e);
                Err(e)
            }
        }
    }
}
