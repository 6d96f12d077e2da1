//! Repositorios
//!
//! Acceso a los datos de vehículos detrás del trait `VehicleStore`.

pub mod vehicle_repository;
pub mod vehicle_store;

pub use vehicle_repository::PgVehicleRepository;
pub use vehicle_store::{InMemoryVehicleStore, VehicleStore};
