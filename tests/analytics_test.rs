mod common;

use axum::http::StatusCode;
use common::{app_with_scores, get, post_json, transaction_body};
use serde_json::json;

#[tokio::test]
async fn test_summary_over_whole_ledger() {
    // approve, review, block, block
    let app = app_with_scores(vec![10.0, 60.0, 80.0, 99.0]);
    for (id, amount) in [("A", 100), ("B", 250), ("C", 40), ("D", 10)] {
        let mut body = transaction_body(id, "2024-01-15T10:00:00Z");
        body["amount"] = json!(amount);
        post_json(&app, &body).await;
    }

    let (status, summary) = get(&app, "/analytics/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["period"], json!({"start_date": null, "end_date": null}));
    assert_eq!(summary["transactions"], json!({"total": 4, "flagged": 1, "blocked": 2}));
    assert_eq!(summary["amount"], json!({"total": 400.0, "flagged": 250.0, "blocked": 50.0}));
    assert_eq!(summary["fraud_rate"], 75.0);
    assert_eq!(summary["top_rules"][0]["rule_id"], "R001");
    assert_eq!(summary["top_rules"][0]["triggers"], 4);
    assert_eq!(summary["fraud_by_category"][0], json!({"category": "high", "count": 2, "percentage": 50.0}));
}

#[tokio::test]
async fn test_summary_respects_period() {
    let app = app_with_scores(vec![90.0, 10.0]);
    post_json(&app, &transaction_body("OLD", "2023-12-31T23:59:59Z")).await;
    post_json(&app, &transaction_body("NEW", "2024-01-01T00:00:00Z")).await;

    let (_, summary) = get(&app, "/analytics/summary?start_date=2024-01-01").await;

    assert_eq!(summary["transactions"]["total"], 1);
    assert_eq!(summary["transactions"]["blocked"], 0);
    assert_eq!(summary["fraud_rate"], 0.0);
    assert_eq!(summary["period"]["start_date"], "2024-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_summary_rejects_bad_dates() {
    let app = app_with_scores(vec![10.0]);

    let (status, body) = get(&app, "/analytics/summary?end_date=soon").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid end_date"}));
}
