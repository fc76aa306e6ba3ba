//! Domain layer: framework-agnostic entities and rules.

pub mod analytics;
pub mod filter;
pub mod transaction;

pub use analytics::AnalyticsSummary;
pub use filter::{parse_timestamp, Page, TransactionFilter, TransactionPage};
pub use transaction::{Action, Assessment, RiskLevel, RuleTrigger, Transaction};
