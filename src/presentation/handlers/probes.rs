use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

const HEALTHY: &str = "Healthy";

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub checks: Vec<HealthCheck>,
}

#[derive(Serialize)]
pub struct HealthCheck {
    pub name: &'static str,
    pub status: &'static str,
    pub description: &'static str,
}

pub async fn ping_handler() -> &'static str {
    "Pong"
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthReport {
            status: HEALTHY,
            checks: vec![HealthCheck {
                name: "self",
                status: HEALTHY,
                description: "API is running",
            }],
        }),
    )
}
