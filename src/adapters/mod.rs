//! Adapters implementing the ports.

pub mod in_memory_transaction_repository;
pub mod random_fraud_scorer;

pub use in_memory_transaction_repository::InMemoryTransactionRepository;
pub use random_fraud_scorer::RandomFraudScorer;
