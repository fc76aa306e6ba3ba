#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fraud_ledger::adapters::InMemoryTransactionRepository;
use fraud_ledger::ports::{FraudScorer, ScoringInput};
use fraud_ledger::services::LedgerService;
use fraud_ledger::{create_app, AppState};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Cycles through a fixed list of scores so risk levels are predictable.
pub struct ScriptedScorer {
    scores: Vec<f64>,
    next: AtomicUsize,
}

impl ScriptedScorer {
    pub fn new(scores: Vec<f64>) -> Self {
        Self {
            scores,
            next: AtomicUsize::new(0),
        }
    }
}

impl FraudScorer for ScriptedScorer {
    fn score(&self, _tx: &ScoringInput<'_>) -> f64 {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.scores[i % self.scores.len()]
    }
}

pub fn app_with_scores(scores: Vec<f64>) -> Router {
    let ledger = LedgerService::new(
        Arc::new(InMemoryTransactionRepository::new()),
        Arc::new(ScriptedScorer::new(scores)),
    );
    create_app(AppState::new(ledger))
}

pub fn transaction_body(id: &str, timestamp: &str) -> Value {
    json!({
        "transaction_id": id,
        "amount": 100,
        "currency": "USD",
        "payer": {
            "id": "USR-00001",
            "email": "payer@example.com",
            "ip_address": "203.0.113.7",
            "device_fingerprint": "fp-1"
        },
        "payee": {"id": "MER-00001", "name": "Corner Shop"},
        "payment_method": {"type": "Credit Card", "last4": "4242", "expiry": "12/30"},
        "timestamp": timestamp
    })
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

pub async fn post_json(app: &Router, body: &Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri("/transactions")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub fn ids(listing: &Value) -> Vec<String> {
    listing["transactions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tx| tx["transaction_id"].as_str().unwrap().to_string())
        .collect()
}
