pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod ports;
pub mod services;
pub mod utils;
pub mod validation;

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Instant;

use crate::adapters::{InMemoryTransactionRepository, RandomFraudScorer};
use crate::config::Config;
use crate::middleware::{request_logger_middleware, RequestLogging};
use crate::services::LedgerService;

#[derive(Clone)]
pub struct AppState {
    pub ledger: LedgerService,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(ledger: LedgerService) -> Self {
        Self {
            ledger,
            started_at: Instant::now(),
        }
    }

    /// In-memory ledger with random scoring, as configured.
    pub fn from_config(config: &Config) -> Self {
        let ledger = LedgerService::new(
            Arc::new(InMemoryTransactionRepository::new()),
            Arc::new(RandomFraudScorer),
        )
        .with_max_limit(config.list_max_limit);

        Self::new(ledger)
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_logging(state, RequestLogging::default())
}

pub fn create_app_with_logging(state: AppState, logging: RequestLogging) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/transactions",
            get(handlers::transactions::list_transactions)
                .post(handlers::transactions::submit_transaction),
        )
        .route(
            "/transactions/:transaction_id",
            get(handlers::transactions::get_transaction),
        )
        .route("/analytics/summary", get(handlers::analytics::summary))
        .layer(axum::middleware::from_fn_with_state(
            logging,
            request_logger_middleware,
        ))
        .with_state(state)
}
