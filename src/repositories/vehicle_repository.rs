use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::vehicle_store::VehicleStore;
use crate::models::compliance::ComplianceCategory;
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};
use crate::utils::errors::{conflict_error, not_found_error, AppError, AppResult};

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Base de datos inalcanzable = 503, el resto = error de base de datos
fn map_db_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            AppError::ServiceUnavailable(format!("Vehicle store unreachable: {}", e))
        }
        other => AppError::Database(other),
    }
}

/// Traducir violaciones de unicidad de `registration` a Conflict
fn map_write_error(e: sqlx::Error, registration: &str) -> AppError {
    let unique_violation = e
        .as_database_error()
        .map_or(false, |db_err| db_err.is_unique_violation());

    if unique_violation {
        conflict_error("Vehicle", "registration", registration)
    } else {
        map_db_error(e)
    }
}

#[async_trait]
impl VehicleStore for PgVehicleRepository {
    async fn list_vehicles(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles ORDER BY created_at DESC, id"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        debug!("🚗 {} vehículos cargados", vehicles.len());
        Ok(vehicles)
    }

    async fn find_vehicle(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(vehicle)
    }

    async fn create_vehicle(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        let vehicle = Vehicle::from_request(request, Utc::now());

        let created = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, registration, make, model, colour, fuel_type,
                mot_due, tax_due, insurance_due,
                mot_actioned, tax_actioned, insurance_actioned,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, FALSE, FALSE, FALSE, $10, $10)
            RETURNING *
            "#
        )
        .bind(vehicle.id)
        .bind(&vehicle.registration)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(&vehicle.colour)
        .bind(&vehicle.fuel_type)
        .bind(vehicle.mot_due)
        .bind(vehicle.tax_due)
        .bind(vehicle.insurance_due)
        .bind(vehicle.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &vehicle.registration))?;

        Ok(created)
    }

    async fn update_vehicle(&self, id: Uuid, request: UpdateVehicleRequest) -> AppResult<Vehicle> {
        // Leer y escribir en la misma transacción para que el reset de flags
        // vaya junto con el cambio de vencimiento
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let mut vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE id = $1 FOR UPDATE"
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        vehicle.apply_update(request, Utc::now());

        let updated = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET registration = $2, make = $3, model = $4, colour = $5, fuel_type = $6,
                mot_due = $7, tax_due = $8, insurance_due = $9,
                mot_actioned = $10, tax_actioned = $11, insurance_actioned = $12,
                updated_at = $13
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(vehicle.id)
        .bind(&vehicle.registration)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(&vehicle.colour)
        .bind(&vehicle.fuel_type)
        .bind(vehicle.mot_due)
        .bind(vehicle.tax_due)
        .bind(vehicle.insurance_due)
        .bind(vehicle.mot_actioned)
        .bind(vehicle.tax_actioned)
        .bind(vehicle.insurance_actioned)
        .bind(vehicle.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &vehicle.registration))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(updated)
    }

    async fn delete_vehicle(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }
        Ok(())
    }

    async fn set_actioned(&self, id: Uuid, category: ComplianceCategory) -> AppResult<()> {
        // El nombre de columna sale de un enum cerrado, nunca de la request
        let sql = format!(
            "UPDATE vehicles SET {} = TRUE, updated_at = $2 WHERE id = $1",
            category.action_field().column_name()
        );

        let result = sqlx::query(&sql)
            .bind(id)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_store_maps_to_unavailable() {
        assert!(matches!(
            map_db_error(sqlx::Error::PoolTimedOut),
            AppError::ServiceUnavailable(_)
        ));
        assert!(matches!(map_db_error(sqlx::Error::RowNotFound), AppError::Database(_)));
        assert!(matches!(
            map_write_error(sqlx::Error::PoolClosed, "AB12CDE"),
            AppError::ServiceUnavailable(_)
        ));
    }
}
