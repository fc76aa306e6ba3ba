//! Transaction domain entity.
//! Framework-agnostic representation of a scored payment transaction.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const HIGH_RISK_THRESHOLD: f64 = 75.0;
pub const MEDIUM_RISK_THRESHOLD: f64 = 50.0;

/// Risk bucket derived from a fraud score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score > MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn action(self) -> Action {
        match self {
            RiskLevel::High => Action::Block,
            RiskLevel::Medium => Action::Review,
            RiskLevel::Low => Action::Approve,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision taken on a transaction, one per risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Approve,
    Review,
    Block,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Approve => "approve",
            Action::Review => "review",
            Action::Block => "block",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule reported as triggered for a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTrigger {
    pub rule_id: String,
    pub name: String,
    pub description: String,
}

impl RuleTrigger {
    /// The single static rule attached to every submission, regardless of risk.
    pub fn high_risk() -> Self {
        Self {
            rule_id: "R001".to_string(),
            name: "High Risk".to_string(),
            description: "Transaction flagged due to risk analysis".to_string(),
        }
    }
}

/// Fraud assessment attached to a transaction at submission time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub fraud_score: f64,
    pub risk_level: RiskLevel,
    pub action: Action,
}

impl Assessment {
    pub fn from_score(fraud_score: f64) -> Self {
        let risk_level = RiskLevel::from_score(fraud_score);
        Self {
            fraud_score,
            risk_level,
            action: risk_level.action(),
        }
    }
}

/// Domain entity representing a submitted and scored transaction.
///
/// Nested party and payment objects are kept as raw JSON and returned
/// exactly as the caller sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub amount: Value,
    pub currency: String,
    pub payer: Value,
    pub payee: Value,
    pub payment_method: Value,
    pub timestamp: String,
    pub fraud_score: f64,
    pub risk_level: RiskLevel,
    pub action: Action,
    pub rules_triggered: Vec<RuleTrigger>,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        transaction_id: String,
        amount: Value,
        currency: String,
        payer: Value,
        payee: Value,
        payment_method: Value,
        timestamp: String,
        assessment: Assessment,
    ) -> Self {
        Self {
            transaction_id,
            amount,
            currency,
            payer,
            payee,
            payment_method,
            timestamp,
            fraud_score: assessment.fraud_score,
            risk_level: assessment.risk_level,
            action: assessment.action,
            rules_triggered: vec![RuleTrigger::high_risk()],
        }
    }

    /// Numeric amount, if the caller sent a JSON number.
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classifies_score_boundaries() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(50.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(50.0001), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(75.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(75.0001), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(99.999), RiskLevel::High);
    }

    #[test]
    fn test_maps_risk_level_to_action() {
        assert_eq!(RiskLevel::Low.action(), Action::Approve);
        assert_eq!(RiskLevel::Medium.action(), Action::Review);
        assert_eq!(RiskLevel::High.action(), Action::Block);
    }

    #[test]
    fn test_low_risk_still_carries_static_rule() {
        let tx = Transaction::new(
            "T1".to_string(),
            json!(100),
            "USD".to_string(),
            json!({}),
            json!({}),
            json!({}),
            "2024-01-01T00:00:00Z".to_string(),
            Assessment::from_score(10.0),
        );

        assert_eq!(tx.risk_level, RiskLevel::Low);
        assert_eq!(tx.rules_triggered, vec![RuleTrigger::high_risk()]);
    }

    #[test]
    fn test_serializes_enums_lowercase() {
        let tx = Transaction::new(
            "T2".to_string(),
            json!("12.50"),
            "EUR".to_string(),
            json!({"id": "USR-1"}),
            json!({"id": "MER-1", "name": "Shop"}),
            json!({"type": "card"}),
            "2024-01-01T00:00:00Z".to_string(),
            Assessment::from_score(80.0),
        );

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["risk_level"], "high");
        assert_eq!(value["action"], "block");
        assert_eq!(value["amount"], "12.50");
        assert_eq!(value["rules_triggered"][0]["rule_id"], "R001");
        assert_eq!(value["payee"]["name"], "Shop");
    }
}
