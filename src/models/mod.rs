//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos: vehículos, categorías de
//! cumplimiento y recordatorios derivados.

pub mod compliance;
pub mod reminder;
pub mod vehicle;
