//! Record types for the rewards ledger
//!
//! Both record types carry transaction timestamps and derive their total
//! order from field order, so they can sit directly in the ledger's
//! min-heaps (wrapped in `std::cmp::Reverse`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point amounts are signed: credits may be negative (debits) and spend
/// breakdowns report non-positive deductions per payer.
pub type Points = i64;

/// Transaction instant. Not required to arrive in order across calls.
pub type Timestamp = DateTime<Utc>;

/// A positive point grant from a payer, still at least partially unspent.
///
/// Ordering is ascending `(timestamp, payer, points)`: ties on timestamp
/// break lexicographically by payer name, then by amount, giving a total
/// order over simultaneous contributions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub timestamp: Timestamp,
    pub payer: String,
    pub points: Points,
}

impl ContributionRecord {
    pub fn new(timestamp: Timestamp, payer: impl Into<String>, points: Points) -> Self {
        Self {
            timestamp,
            payer: payer.into(),
            points,
        }
    }
}

/// A withdrawal of points from one payer that has not yet been deducted
/// from a specific contribution.
///
/// Scoped to a single payer by its position in the debt book; ordered
/// ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DebtRecord {
    pub timestamp: Timestamp,
    pub points: Points,
}

impl DebtRecord {
    pub fn new(timestamp: Timestamp, points: Points) -> Self {
        Self { timestamp, points }
    }
}
