//! Services module
//!
//! Este módulo contiene la lógica de negocio: evaluación de plazos,
//! agregación de recordatorios y la fuente de fecha.

pub mod clock;
pub mod deadline_evaluator;
pub mod reminder_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use reminder_service::ReminderService;
