//! Evaluador de plazos
//!
//! Función pura: dado un vencimiento, la fecha de referencia y la antelación
//! de la categoría, calcula los días restantes, si el plazo ya entra en la
//! ventana de aviso y su nivel de urgencia. No tiene efectos secundarios.

use chrono::NaiveDate;

use crate::models::compliance::{
    ComplianceCategory, UrgencyLevel, CRITICAL_THRESHOLD_DAYS, STATUS_URGENT_WINDOW_DAYS,
};
use crate::models::reminder::DeadlineStatus;
use crate::models::vehicle::Vehicle;

/// Resultado de evaluar un plazo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineEvaluation {
    pub days_until_due: i64,
    pub within_lead_time: bool,
    pub urgency: UrgencyLevel,
}

impl DeadlineEvaluation {
    /// Accionable = dentro de la antelación y todavía sin reconocer
    pub fn is_actionable(&self, actioned: bool) -> bool {
        self.within_lead_time && !actioned
    }
}

/// Días de calendario hasta el vencimiento (negativo si ya pasó)
///
/// Ambas fechas no tienen hora, así que la diferencia ya es entera y el
/// redondeo hacia arriba no cambia nada: un plazo que vence hoy da 0.
pub fn days_until_due(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Clasificar la urgencia; los umbrales no dependen de la categoría
pub fn classify_urgency(days_until_due: i64) -> UrgencyLevel {
    if days_until_due <= 0 {
        UrgencyLevel::Overdue
    } else if days_until_due <= CRITICAL_THRESHOLD_DAYS {
        UrgencyLevel::Critical
    } else {
        UrgencyLevel::Warning
    }
}

pub fn evaluate(due: NaiveDate, today: NaiveDate, lead_time_days: i64) -> DeadlineEvaluation {
    let days = days_until_due(due, today);
    DeadlineEvaluation {
        days_until_due: days,
        within_lead_time: days <= lead_time_days,
        urgency: classify_urgency(days),
    }
}

/// Evaluar una categoría de un vehículo con su antelación de política
pub fn evaluate_category(
    vehicle: &Vehicle,
    category: ComplianceCategory,
    today: NaiveDate,
) -> DeadlineEvaluation {
    evaluate(vehicle.due_date(category), today, category.lead_time_days())
}

/// Estado de las tres categorías para la ficha del vehículo
pub fn deadline_statuses(vehicle: &Vehicle, today: NaiveDate) -> Vec<DeadlineStatus> {
    ComplianceCategory::ALL
        .iter()
        .map(|&category| {
            let due_date = vehicle.due_date(category);
            let days_until = days_until_due(due_date, today);
            DeadlineStatus {
                category,
                due_date,
                days_until,
                is_urgent: (0..=STATUS_URGENT_WINDOW_DAYS).contains(&days_until),
                actioned: vehicle.is_actioned(category),
            }
        })
        .collect()
}
