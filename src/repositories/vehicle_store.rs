//! Fuente de datos de vehículos
//!
//! El motor de recordatorios sólo lee instantáneas de vehículos y pide que se
//! marque un flag `*_actioned`. Este trait es esa frontera; hay una
//! implementación PostgreSQL y otra en memoria.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::compliance::ComplianceCategory;
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};
use crate::utils::errors::{conflict_error, not_found_error, AppResult};

#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Instantánea completa, los más recientes primero
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>>;

    async fn find_vehicle(&self, id: Uuid) -> AppResult<Option<Vehicle>>;

    async fn create_vehicle(&self, request: CreateVehicleRequest) -> AppResult<Vehicle>;

    /// Actualización parcial; renovar un vencimiento resetea su flag
    async fn update_vehicle(&self, id: Uuid, request: UpdateVehicleRequest) -> AppResult<Vehicle>;

    async fn delete_vehicle(&self, id: Uuid) -> AppResult<()>;

    /// Marcar como reconocido el plazo de una categoría (sólo pone `true`)
    async fn set_actioned(&self, id: Uuid, category: ComplianceCategory) -> AppResult<()>;
}

/// Store en memoria, útil sin base de datos y en tests
#[derive(Clone, Default)]
pub struct InMemoryVehicleStore {
    vehicles: Arc<RwLock<HashMap<Uuid, Vehicle>>>,
}

impl InMemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insertar un vehículo tal cual, conservando sus flags
    #[cfg(test)]
    pub async fn insert(&self, vehicle: Vehicle) {
        self.vehicles.write().await.insert(vehicle.id, vehicle);
    }
}

fn ensure_unique_registration(
    vehicles: &HashMap<Uuid, Vehicle>,
    registration: &str,
    except: Option<Uuid>,
) -> AppResult<()> {
    let taken = vehicles
        .values()
        .any(|v| Some(v.id) != except && v.registration == registration);
    if taken {
        return Err(conflict_error("Vehicle", "registration", registration));
    }
    Ok(())
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        let mut vehicles: Vec<Vehicle> = self.vehicles.read().await.values().cloned().collect();
        vehicles.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(vehicles)
    }

    async fn find_vehicle(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        Ok(self.vehicles.read().await.get(&id).cloned())
    }

    async fn create_vehicle(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        ensure_unique_registration(&vehicles, &request.registration, None)?;
        let vehicle = Vehicle::from_request(request, Utc::now());
        vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    async fn update_vehicle(&self, id: Uuid, request: UpdateVehicleRequest) -> AppResult<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        if let Some(registration) = &request.registration {
            ensure_unique_registration(&vehicles, registration, Some(id))?;
        }

        let vehicle = vehicles
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;
        vehicle.apply_update(request, Utc::now());
        Ok(vehicle.clone())
    }

    async fn delete_vehicle(&self, id: Uuid) -> AppResult<()> {
        self.vehicles
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))
    }

    async fn set_actioned(&self, id: Uuid, category: ComplianceCategory) -> AppResult<()> {
        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;
        vehicle.set_actioned(category, true);
        vehicle.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::tests::{date, sample_vehicle};
    use crate::utils::errors::AppError;

    fn create_request(registration: &str) -> CreateVehicleRequest {
        CreateVehicleRequest {
            registration: registration.to_string(),
            make: "Ford".to_string(),
            model: "Transit".to_string(),
            colour: None,
            fuel_type: None,
            mot_due: date("2026-03-01"),
            tax_due: date("2026-03-01"),
            insurance_due: date("2026-03-01"),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = InMemoryVehicleStore::new();
        let vehicle = store.create_vehicle(create_request("AB12CDE")).await.unwrap();

        let found = store.find_vehicle(vehicle.id).await.unwrap();
        assert_eq!(found, Some(vehicle));
        assert_eq!(store.list_vehicles().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let store = InMemoryVehicleStore::new();
        store.create_vehicle(create_request("AB12CDE")).await.unwrap();

        let err = store.create_vehicle(create_request("AB12CDE")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_set_actioned_only_touches_category() {
        let store = InMemoryVehicleStore::new();
        let vehicle = sample_vehicle("AB12CDE");
        let id = vehicle.id;
        store.insert(vehicle).await;

        store.set_actioned(id, ComplianceCategory::Tax).await.unwrap();

        let stored = store.find_vehicle(id).await.unwrap().unwrap();
        assert!(stored.tax_actioned);
        assert!(!stored.mot_actioned);
        assert!(!stored.insurance_actioned);
    }

    #[tokio::test]
    async fn test_set_actioned_unknown_vehicle() {
        let store = InMemoryVehicleStore::new();
        let err = store
            .set_actioned(Uuid::new_v4(), ComplianceCategory::Mot)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_renewal_resets_flag() {
        let store = InMemoryVehicleStore::new();
        let vehicle = store.create_vehicle(create_request("AB12CDE")).await.unwrap();
        store.set_actioned(vehicle.id, ComplianceCategory::Mot).await.unwrap();

        let updated = store
            .update_vehicle(
                vehicle.id,
                UpdateVehicleRequest {
                    mot_due: Some(date("2027-03-01")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.mot_due, date("2027-03-01"));
        assert!(!updated.mot_actioned);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryVehicleStore::new();
        let vehicle = store.create_vehicle(create_request("AB12CDE")).await.unwrap();

        store.delete_vehicle(vehicle.id).await.unwrap();
        assert!(store.find_vehicle(vehicle.id).await.unwrap().is_none());
        assert!(matches!(
            store.delete_vehicle(vehicle.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
