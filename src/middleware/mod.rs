//! Middleware del sistema
//!
//! Este módulo contiene el middleware HTTP, por ahora CORS.

pub mod cors;

pub use cors::*;
