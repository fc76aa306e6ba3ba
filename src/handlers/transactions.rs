use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{parse_timestamp, Page, TransactionFilter};
use crate::error::AppError;
use crate::validation::SubmissionPayload;
use crate::AppState;

/// Query parameters for the listing endpoint. Empty values are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub risk_level: Option<String>,
    /// Matches the `action` field of each record.
    pub status: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn parse_bound(name: &str, value: Option<String>) -> Result<Option<DateTime<Utc>>, AppError> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid {}", name))),
    }
}

fn parse_count(value: Option<String>) -> Result<Option<usize>, AppError> {
    non_empty(value)
        .map(|raw| raw.parse::<usize>())
        .transpose()
        .map_err(|_| AppError::BadRequest("Invalid query parameters".to_string()))
}

impl ListParams {
    pub fn into_query(self) -> Result<(TransactionFilter, Page), AppError> {
        let filter = TransactionFilter {
            start_date: parse_bound("start_date", self.start_date)?,
            end_date: parse_bound("end_date", self.end_date)?,
            risk_level: non_empty(self.risk_level),
            status: non_empty(self.status),
        };

        let page = Page::new(parse_count(self.limit)?, parse_count(self.offset)?);

        Ok((filter, page))
    }
}

pub async fn submit_transaction(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let payload = SubmissionPayload::from_json(body)
        .ok_or_else(|| AppError::BadRequest("Malformed JSON body".to_string()))?;
    let tx = state.ledger.submit(payload).await?;

    Ok((StatusCode::CREATED, Json(tx)))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tx = state.ledger.get(&transaction_id).await?;

    Ok(Json(tx))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let (filter, page) = params.into_query()?;

    let listing = state.ledger.list(&filter, page).await?;

    Ok(Json(listing))
}
