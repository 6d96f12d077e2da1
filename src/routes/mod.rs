pub mod reminder_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/reminders", reminder_routes::create_reminder_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet-compliance",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::EnvironmentConfig;
    use crate::models::vehicle::tests::{date, sample_vehicle};
    use crate::models::vehicle::Vehicle;
    use crate::repositories::InMemoryVehicleStore;
    use crate::services::FixedClock;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn test_app(vehicles: Vec<Vehicle>) -> Router {
        let store = InMemoryVehicleStore::new();
        for vehicle in vehicles {
            store.insert(vehicle).await;
        }
        let state = AppState::new(
            EnvironmentConfig::default(),
            Arc::new(store),
            Arc::new(FixedClock(date("2025-11-01"))),
        );
        create_app_router(state)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn scenario() -> (Vehicle, Vehicle) {
        let mut a = sample_vehicle("AAA111");
        a.mot_due = date("2025-11-05");
        a.tax_due = date("2025-11-03");
        a.insurance_due = date("2026-11-01");

        let mut b = sample_vehicle("BBB222");
        b.insurance_due = date("2025-10-20");
        b.mot_due = date("2026-06-01");
        b.tax_due = date("2026-11-01");

        (a, b)
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_app(vec![]).await;
        let (status, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_reminders() {
        let (a, b) = scenario();
        let app = test_app(vec![a, b]).await;

        let (status, body) = send(&app, "GET", "/api/reminders", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reference_date"], "2025-11-01");

        let reminders = body["reminders"].as_array().unwrap();
        assert_eq!(reminders.len(), 3);
        assert_eq!(reminders[0]["vehicle"], "BBB222 (Ford Transit)");
        assert_eq!(reminders[0]["category"], "Insurance");
        assert_eq!(reminders[0]["urgency"], "overdue");
        assert_eq!(reminders[0]["days_until_due"], -12);
        assert_eq!(reminders[1]["category"], "Tax");
        assert_eq!(reminders[1]["action_field"], "tax_actioned");
        assert_eq!(reminders[1]["action_hint"], "Renew road tax");
        assert_eq!(reminders[2]["category"], "MOT");
        assert_eq!(reminders[2]["days_until_due"], 4);

        assert_eq!(body["summary"]["total"], 3);
        assert_eq!(body["summary"]["critical"], 2);
        assert_eq!(body["policy"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_acknowledge_removes_reminder() {
        let (a, b) = scenario();
        let a_id = a.id;
        let app = test_app(vec![a, b]).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/reminders/acknowledge",
            Some(json!({ "vehicle_id": a_id, "category": "Tax" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["action_field"], "tax_actioned");

        let (_, body) = send(&app, "GET", "/api/reminders", None).await;
        let categories: Vec<&str> = body["reminders"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["category"].as_str().unwrap())
            .collect();
        assert_eq!(categories, vec!["Insurance", "MOT"]);
    }

    #[tokio::test]
    async fn test_acknowledge_via_vehicle_path() {
        let (a, b) = scenario();
        let b_id = b.id;
        let app = test_app(vec![a, b]).await;

        let uri = format!("/api/vehicles/{}/acknowledge/insurance", b_id);
        let (status, _) = send(&app, "POST", &uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, "GET", &format!("/api/vehicles/{}", b_id), None).await;
        assert_eq!(body["insurance_actioned"], true);
        assert_eq!(body["mot_actioned"], false);

        let uri = format!("/api/vehicles/{}/acknowledge/service", b_id);
        let (status, _) = send(&app, "POST", &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_acknowledge_unknown_vehicle() {
        let app = test_app(vec![]).await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/reminders/acknowledge",
            Some(json!({ "vehicle_id": uuid::Uuid::new_v4(), "category": "MOT" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_vehicle_crud_and_status_card() {
        let app = test_app(vec![]).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/vehicles",
            Some(json!({
                "registration": "AB12CDE",
                "make": "Ford",
                "model": "Transit",
                "colour": "White",
                "fuel_type": "Diesel",
                "mot_due": "2025-11-15",
                "tax_due": "2025-12-01",
                "insurance_due": "2025-11-20"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["data"]["id"].as_str().unwrap().to_string();
        let deadlines = body["data"]["deadlines"].as_array().unwrap();
        assert_eq!(deadlines[0]["days_until"], 14);
        assert_eq!(deadlines[0]["is_urgent"], true);
        assert_eq!(deadlines[1]["is_urgent"], false);

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/vehicles/{}", id),
            Some(json!({ "colour": "Blue" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["colour"], "Blue");

        let (_, body) = send(&app, "GET", "/api/vehicles", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let (status, _) = send(&app, "DELETE", &format!("/api/vehicles/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, "GET", &format!("/api/vehicles/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_vehicle_rejected() {
        let app = test_app(vec![]).await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/vehicles",
            Some(json!({
                "registration": "X",
                "make": "Ford",
                "model": "Transit",
                "mot_due": "2025-11-15",
                "tax_due": "2025-12-01",
                "insurance_due": "2025-11-20"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}
