use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::compliance::{ActionField, ComplianceCategory, UrgencyLevel};
use crate::models::reminder::{Reminder, ReminderReport, ReminderSummary};

// Request para reconocer un recordatorio
#[derive(Debug, Deserialize)]
pub struct AcknowledgeReminderRequest {
    pub vehicle_id: Uuid,
    pub category: ComplianceCategory,
}

// Recordatorio tal como lo consume el dashboard
#[derive(Debug, Serialize)]
pub struct ReminderResponse {
    pub vehicle_id: Uuid,
    pub vehicle: String,
    pub category: ComplianceCategory,
    pub due_date: NaiveDate,
    pub days_until_due: i64,
    pub urgency: UrgencyLevel,
    pub action_field: ActionField,
    pub action_hint: &'static str,
}

// Antelación de aviso por categoría
#[derive(Debug, Serialize)]
pub struct ReminderPolicyEntry {
    pub category: ComplianceCategory,
    pub lead_time_days: i64,
}

#[derive(Debug, Serialize)]
pub struct ReminderListResponse {
    pub reference_date: NaiveDate,
    pub reminders: Vec<ReminderResponse>,
    pub summary: ReminderSummary,
    pub policy: Vec<ReminderPolicyEntry>,
}

// Respuesta del acknowledgment
#[derive(Debug, Serialize)]
pub struct AcknowledgeReminderResponse {
    pub vehicle_id: Uuid,
    pub category: ComplianceCategory,
    pub action_field: ActionField,
}

impl From<Reminder> for ReminderResponse {
    fn from(reminder: Reminder) -> Self {
        Self {
            vehicle_id: reminder.vehicle_id,
            vehicle: reminder.vehicle,
            category: reminder.category,
            due_date: reminder.due_date,
            days_until_due: reminder.days_until_due,
            urgency: reminder.urgency,
            action_field: reminder.action_field,
            action_hint: reminder.category.action_hint(),
        }
    }
}

impl ReminderPolicyEntry {
    pub fn all() -> Vec<Self> {
        ComplianceCategory::ALL
            .iter()
            .map(|&category| Self {
                category,
                lead_time_days: category.lead_time_days(),
            })
            .collect()
    }
}

impl From<ReminderReport> for ReminderListResponse {
    fn from(report: ReminderReport) -> Self {
        Self {
            reference_date: report.reference_date,
            reminders: report.reminders.into_iter().map(ReminderResponse::from).collect(),
            summary: report.summary,
            policy: ReminderPolicyEntry::all(),
        }
    }
}
