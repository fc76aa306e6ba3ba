//! Fraud analytics computed over a set of ledger records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::transaction::{Action, RiskLevel, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Period {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionCounts {
    pub total: usize,
    pub flagged: usize,
    pub blocked: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AmountTotals {
    pub total: f64,
    pub flagged: f64,
    pub blocked: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleStats {
    pub rule_id: String,
    pub name: String,
    pub triggers: usize,
    /// Percentage of triggering records that were flagged or blocked.
    pub effectiveness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: RiskLevel,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub period: Period,
    pub transactions: TransactionCounts,
    pub amount: AmountTotals,
    pub fraud_rate: f64,
    pub top_rules: Vec<RuleStats>,
    pub fraud_by_category: Vec<CategoryStats>,
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

impl AnalyticsSummary {
    pub fn compute(period: Period, records: &[Transaction]) -> Self {
        let mut counts = TransactionCounts::default();
        let mut amount = AmountTotals::default();
        // rule_id -> (name, triggers, hits)
        let mut rules: BTreeMap<String, (String, usize, usize)> = BTreeMap::new();
        let mut by_level: BTreeMap<RiskLevel, usize> = BTreeMap::new();

        for tx in records {
            let value = tx.amount_value().unwrap_or(0.0);
            counts.total += 1;
            amount.total += value;

            let suspicious = match tx.action {
                Action::Review => {
                    counts.flagged += 1;
                    amount.flagged += value;
                    true
                }
                Action::Block => {
                    counts.blocked += 1;
                    amount.blocked += value;
                    true
                }
                Action::Approve => false,
            };

            for rule in &tx.rules_triggered {
                let entry = rules
                    .entry(rule.rule_id.clone())
                    .or_insert_with(|| (rule.name.clone(), 0, 0));
                entry.1 += 1;
                if suspicious {
                    entry.2 += 1;
                }
            }

            *by_level.entry(tx.risk_level).or_default() += 1;
        }

        let mut top_rules: Vec<RuleStats> = rules
            .into_iter()
            .map(|(rule_id, (name, triggers, hits))| RuleStats {
                rule_id,
                name,
                triggers,
                effectiveness: percentage(hits, triggers),
            })
            .collect();
        // Stable sort keeps rule_id order among ties.
        top_rules.sort_by(|a, b| b.triggers.cmp(&a.triggers));

        let fraud_by_category = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low]
            .into_iter()
            .filter_map(|level| {
                by_level.get(&level).map(|&count| CategoryStats {
                    category: level,
                    count,
                    percentage: percentage(count, counts.total),
                })
            })
            .collect();

        Self {
            period,
            fraud_rate: percentage(counts.flagged + counts.blocked, counts.total),
            transactions: counts,
            amount,
            top_rules,
            fraud_by_category,
        }
    }
}
