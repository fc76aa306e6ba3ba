pub mod analytics;
pub mod transactions;

use crate::error::AppError;
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

pub const ROOT_MESSAGE: &str = "Transaction API is running!";

pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub ledger_size: usize,
}

pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ledger_size = state.ledger.ledger_size().await?;

    Ok(Json(HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        ledger_size,
    }))
}
