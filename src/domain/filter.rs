//! Listing filters and pagination over the ledger.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use super::transaction::Transaction;

pub const DEFAULT_LIMIT: usize = 20;
pub const DEFAULT_OFFSET: usize = 0;

/// Parses an ISO-8601 timestamp.
///
/// The same rule applies to filter bounds and to stored timestamps so that
/// bound comparisons are always between values parsed identically. Accepts
/// RFC 3339, a naive date-time (read as UTC) and a bare date (UTC midnight).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Predicates applied to a listing. All present predicates must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub risk_level: Option<String>,
    /// Matched against the derived `action` field; no separate status exists.
    pub status: Option<String>,
}

impl TransactionFilter {
    pub fn date_range(start_date: Option<DateTime<Utc>>, end_date: Option<DateTime<Utc>>) -> Self {
        Self {
            start_date,
            end_date,
            ..Default::default()
        }
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        self.matches_dates(tx) && self.matches_risk_level(tx) && self.matches_status(tx)
    }

    fn matches_dates(&self, tx: &Transaction) -> bool {
        if self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }

        // A timestamp that cannot be parsed never satisfies a bound.
        let Some(ts) = parse_timestamp(&tx.timestamp) else {
            return false;
        };

        if let Some(start) = self.start_date {
            if ts < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if ts > end {
                return false;
            }
        }
        true
    }

    fn matches_risk_level(&self, tx: &Transaction) -> bool {
        self.risk_level
            .as_deref()
            .map_or(true, |level| tx.risk_level.as_str() == level)
    }

    fn matches_status(&self, tx: &Transaction) -> bool {
        self.status
            .as_deref()
            .map_or(true, |status| tx.action.as_str() == status)
    }
}

/// Offset pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Page {
    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_LIMIT),
            offset: offset.unwrap_or(DEFAULT_OFFSET),
        }
    }

    /// Clamps `limit` to `max`, when a cap is configured.
    pub fn capped(self, max: Option<usize>) -> Self {
        match max {
            Some(max) if self.limit > max => Self { limit: max, ..self },
            _ => self,
        }
    }

    /// Returns the window of `items`, empty when the offset is past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        let end = start.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPage {
    /// Number of records matching the filter, before pagination.
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub transactions: Vec<Transaction>,
}
