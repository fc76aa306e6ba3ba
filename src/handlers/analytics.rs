use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::transactions::parse_bound;
use crate::domain::TransactionFilter;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub async fn summary(
    State(state): State<AppState>,
    params: Result<Query<SummaryParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let filter = TransactionFilter::date_range(
        parse_bound("start_date", params.start_date)?,
        parse_bound("end_date", params.end_date)?,
    );

    let summary = state.ledger.summary(&filter).await?;

    Ok(Json(summary))
}
