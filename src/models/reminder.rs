//! Recordatorios de cumplimiento
//!
//! Registros derivados, nunca persistidos: se recalculan en cada pasada de
//! agregación.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::compliance::{ActionField, ComplianceCategory, UrgencyLevel};

/// Un plazo (vehículo, categoría) que requiere atención
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub vehicle_id: Uuid,
    pub vehicle: String,
    pub category: ComplianceCategory,
    pub due_date: NaiveDate,
    pub days_until_due: i64,
    pub urgency: UrgencyLevel,
    pub action_field: ActionField,
}

impl Reminder {
    pub fn is_overdue(&self) -> bool {
        self.days_until_due < 0
    }
}

/// Contadores por nivel de urgencia
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReminderSummary {
    pub total: usize,
    pub overdue: usize,
    pub critical: usize,
    pub warning: usize,
}

impl ReminderSummary {
    pub fn from_reminders(reminders: &[Reminder]) -> Self {
        reminders.iter().fold(Self::default(), |mut summary, reminder| {
            summary.total += 1;
            match reminder.urgency {
                UrgencyLevel::Overdue => summary.overdue += 1,
                UrgencyLevel::Critical => summary.critical += 1,
                UrgencyLevel::Warning => summary.warning += 1,
            }
            summary
        })
    }
}

/// Estado de un plazo en la ficha del vehículo, independiente de la antelación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeadlineStatus {
    pub category: ComplianceCategory,
    pub due_date: NaiveDate,
    pub days_until: i64,
    pub is_urgent: bool,
    pub actioned: bool,
}

/// Resultado de una pasada de agregación
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderReport {
    pub reference_date: NaiveDate,
    pub reminders: Vec<Reminder>,
    pub summary: ReminderSummary,
}

impl ReminderReport {
    pub fn new(reference_date: NaiveDate, reminders: Vec<Reminder>) -> Self {
        let summary = ReminderSummary::from_reminders(&reminders);
        Self {
            reference_date,
            reminders,
            summary,
        }
    }
}
