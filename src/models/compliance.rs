//! Categorías de cumplimiento
//!
//! Cada vehículo tiene tres plazos regulatorios independientes (MOT, Tax,
//! Insurance). Este módulo define la tabla de política fija que asocia cada
//! categoría con su antelación de aviso.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Días restantes a partir de los cuales un plazo pasa de `warning` a `critical`
pub const CRITICAL_THRESHOLD_DAYS: i64 = 7;

/// Ventana de la ficha de vehículo: un plazo se marca urgente si vence en 0..=14 días
pub const STATUS_URGENT_WINDOW_DAYS: i64 = 14;

/// Categoría de cumplimiento regulatorio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceCategory {
    #[serde(rename = "MOT", alias = "mot")]
    Mot,
    #[serde(rename = "Tax", alias = "tax")]
    Tax,
    #[serde(rename = "Insurance", alias = "insurance")]
    Insurance,
}

impl ComplianceCategory {
    /// Todas las categorías en orden de evaluación
    pub const ALL: [ComplianceCategory; 3] = [
        ComplianceCategory::Mot,
        ComplianceCategory::Tax,
        ComplianceCategory::Insurance,
    ];

    /// Días antes del vencimiento en que el plazo empieza a avisar
    pub fn lead_time_days(self) -> i64 {
        match self {
            ComplianceCategory::Mot => 30,
            ComplianceCategory::Tax => 7,
            ComplianceCategory::Insurance => 60,
        }
    }

    /// Flag que se marca al reconocer un aviso de esta categoría
    pub fn action_field(self) -> ActionField {
        match self {
            ComplianceCategory::Mot => ActionField::MotActioned,
            ComplianceCategory::Tax => ActionField::TaxActioned,
            ComplianceCategory::Insurance => ActionField::InsuranceActioned,
        }
    }

    /// Texto corto para el operador
    pub fn action_hint(self) -> &'static str {
        match self {
            ComplianceCategory::Mot => "Book MOT test",
            ComplianceCategory::Tax => "Renew road tax",
            ComplianceCategory::Insurance => "Renew insurance policy",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComplianceCategory::Mot => "MOT",
            ComplianceCategory::Tax => "Tax",
            ComplianceCategory::Insurance => "Insurance",
        }
    }
}

impl fmt::Display for ComplianceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mot" => Ok(ComplianceCategory::Mot),
            "tax" => Ok(ComplianceCategory::Tax),
            "insurance" => Ok(ComplianceCategory::Insurance),
            other => Err(format!("Unknown compliance category '{}'", other)),
        }
    }
}

/// Columna `*_actioned` del vehículo asociada a una categoría
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionField {
    MotActioned,
    TaxActioned,
    InsuranceActioned,
}

impl ActionField {
    pub fn column_name(self) -> &'static str {
        match self {
            ActionField::MotActioned => "mot_actioned",
            ActionField::TaxActioned => "tax_actioned",
            ActionField::InsuranceActioned => "insurance_actioned",
        }
    }
}

/// Nivel de urgencia de un plazo accionable
///
/// El orden de las variantes va de más a menos grave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Overdue,
    Critical,
    Warning,
}

impl UrgencyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyLevel::Overdue => "overdue",
            UrgencyLevel::Critical => "critical",
            UrgencyLevel::Warning => "warning",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
