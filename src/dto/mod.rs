//! DTOs
//!
//! Cuerpos de request/response de la API HTTP.

pub mod api_response;
pub mod reminder_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
