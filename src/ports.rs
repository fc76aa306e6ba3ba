//! Ports: the seams between the ledger service and its storage and scoring
//! backends.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Page, Transaction, TransactionFilter, TransactionPage};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Transaction {0} not found")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Ordered, append-only transaction store.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Appends a record and returns it as stored.
    async fn append(&self, tx: Transaction) -> RepositoryResult<Transaction>;

    /// First record in insertion order with the given id.
    async fn find_by_id(&self, transaction_id: &str) -> RepositoryResult<Transaction>;

    /// Filtered records in insertion order, windowed by `page`.
    async fn list_filtered(
        &self,
        filter: &TransactionFilter,
        page: Page,
    ) -> RepositoryResult<TransactionPage>;

    /// All records matching `filter`, in insertion order.
    async fn matching(&self, filter: &TransactionFilter) -> RepositoryResult<Vec<Transaction>>;

    async fn count(&self) -> RepositoryResult<usize>;
}

/// Source of fraud scores in `[0, 100)`.
pub trait FraudScorer: Send + Sync {
    fn score(&self, tx: &ScoringInput<'_>) -> f64;
}

/// Submission data offered to a scorer.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub transaction_id: &'a str,
    pub amount: &'a serde_json::Value,
    pub currency: &'a str,
    pub timestamp: &'a str,
}
