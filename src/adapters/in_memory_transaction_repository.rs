//! In-memory implementation of TransactionRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Page, Transaction, TransactionFilter, TransactionPage};
use crate::ports::{RepositoryError, RepositoryResult, TransactionRepository};

/// Process-lifetime ledger. Clones share the same underlying records.
#[derive(Clone, Default)]
pub struct InMemoryTransactionRepository {
    records: Arc<RwLock<Vec<Transaction>>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn append(&self, tx: Transaction) -> RepositoryResult<Transaction> {
        let mut records = self.records.write().await;
        records.push(tx.clone());
        Ok(tx)
    }

    async fn find_by_id(&self, transaction_id: &str) -> RepositoryResult<Transaction> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|tx| tx.transaction_id == transaction_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(transaction_id.to_string()))
    }

    async fn list_filtered(
        &self,
        filter: &TransactionFilter,
        page: Page,
    ) -> RepositoryResult<TransactionPage> {
        let records = self.records.read().await;
        let filtered: Vec<&Transaction> = records.iter().filter(|tx| filter.matches(tx)).collect();

        Ok(TransactionPage {
            total: filtered.len(),
            limit: page.limit,
            offset: page.offset,
            transactions: page.slice(&filtered).iter().map(|tx| (*tx).clone()).collect(),
        })
    }

    async fn matching(&self, filter: &TransactionFilter) -> RepositoryResult<Vec<Transaction>> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|tx| filter.matches(tx)).cloned().collect())
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.records.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Assessment, RiskLevel};
    use serde_json::json;

    fn tx(id: &str, score: f64) -> Transaction {
        Transaction::new(
            id.to_string(),
            json!(1),
            "USD".to_string(),
            json!({}),
            json!({}),
            json!({}),
            "2024-01-01T00:00:00Z".to_string(),
            Assessment::from_score(score),
        )
    }

    #[tokio::test]
    async fn test_find_returns_first_match_in_insertion_order() {
        let repo = InMemoryTransactionRepository::new();
        repo.append(tx("DUP", 10.0)).await.unwrap();
        repo.append(tx("DUP", 90.0)).await.unwrap();

        let found = repo.find_by_id("DUP").await.unwrap();
        assert_eq!(found.risk_level, RiskLevel::Low);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_is_case_sensitive() {
        let repo = InMemoryTransactionRepository::new();
        repo.append(tx("abc", 10.0)).await.unwrap();

        assert!(matches!(
            repo.find_by_id("ABC").await,
            Err(RepositoryError::NotFound(id)) if id == "ABC"
        ));
    }

    #[tokio::test]
    async fn test_list_counts_before_paging() {
        let repo = InMemoryTransactionRepository::new();
        for i in 0..5 {
            repo.append(tx(&format!("T{}", i), 10.0)).await.unwrap();
        }

        let page = repo
            .list_filtered(&TransactionFilter::default(), Page::new(Some(2), Some(1)))
            .await
            .unwrap();

        assert_eq!(page.total, 5);
        let ids: Vec<_> = page.transactions.iter().map(|t| t.transaction_id.as_str()).collect();
        assert_eq!(ids, vec!["T1", "T2"]);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let repo = InMemoryTransactionRepository::new();
        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.append(tx(&format!("T{}", i), 10.0)).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 50);
    }
}
