//! Ledger service.
//! Scores and records submissions, and answers lookups, listings and
//! analytics over the repository.

use std::sync::Arc;

use crate::domain::analytics::Period;
use crate::domain::{AnalyticsSummary, Assessment, Page, Transaction, TransactionFilter, TransactionPage};
use crate::error::AppError;
use crate::ports::{FraudScorer, ScoringInput, TransactionRepository};
use crate::validation::SubmissionPayload;

#[derive(Clone)]
pub struct LedgerService {
    repository: Arc<dyn TransactionRepository>,
    scorer: Arc<dyn FraudScorer>,
    max_limit: Option<usize>,
}

impl LedgerService {
    pub fn new(repository: Arc<dyn TransactionRepository>, scorer: Arc<dyn FraudScorer>) -> Self {
        Self {
            repository,
            scorer,
            max_limit: None,
        }
    }

    /// Caps listing page sizes at `max_limit`.
    pub fn with_max_limit(mut self, max_limit: Option<usize>) -> Self {
        self.max_limit = max_limit;
        self
    }

    pub async fn submit(&self, payload: SubmissionPayload) -> Result<Transaction, AppError> {
        let submission = payload.validate().map_err(|e| {
            tracing::warn!(error = ?e, "Rejected transaction submission");
            e
        })?;

        let fraud_score = self.scorer.score(&ScoringInput {
            transaction_id: &submission.transaction_id,
            amount: &submission.amount,
            currency: &submission.currency,
            timestamp: &submission.timestamp,
        });
        let assessment = Assessment::from_score(fraud_score);

        let tx = Transaction::new(
            submission.transaction_id,
            submission.amount,
            submission.currency,
            submission.payer,
            submission.payee,
            submission.payment_method,
            submission.timestamp,
            assessment,
        );

        let stored = self.repository.append(tx).await?;
        tracing::info!(
            transaction_id = %stored.transaction_id,
            fraud_score = stored.fraud_score,
            risk_level = %stored.risk_level,
            action = %stored.action,
            "Transaction recorded"
        );

        Ok(stored)
    }

    pub async fn get(&self, transaction_id: &str) -> Result<Transaction, AppError> {
        self.repository.find_by_id(transaction_id).await.map_err(|e| {
            tracing::debug!(transaction_id = %transaction_id, "Transaction lookup missed");
            AppError::from(e)
        })
    }

    pub async fn list(&self, filter: &TransactionFilter, page: Page) -> Result<TransactionPage, AppError> {
        let page = page.capped(self.max_limit);
        Ok(self.repository.list_filtered(filter, page).await?)
    }

    /// Summary over records inside the date bounds of `filter`.
    pub async fn summary(&self, filter: &TransactionFilter) -> Result<AnalyticsSummary, AppError> {
        let bounds = TransactionFilter::date_range(filter.start_date, filter.end_date);
        let records = self.repository.matching(&bounds).await?;

        Ok(AnalyticsSummary::compute(
            Period {
                start_date: filter.start_date,
                end_date: filter.end_date,
            },
            &records,
        ))
    }

    pub async fn ledger_size(&self) -> Result<usize, AppError> {
        Ok(self.repository.count().await?)
    }
}
