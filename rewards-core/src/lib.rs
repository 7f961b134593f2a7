//! Rewards Core - single-account reward-points ledger
//!
//! This crate provides the ledger engine for an account that accumulates
//! points contributed by multiple named payers and spends them oldest-first
//! across all payers:
//! - Contributions are ordered globally by (timestamp, payer, points)
//! - Payer debits are recorded as timestamped debts and reconciled lazily
//!   against that payer's oldest unspent contribution at spend time
//! - A debit that can no longer reach any unspent contribution older than
//!   itself is forgiven rather than carried forward
//!
//! The engine is synchronous and purely in-memory; callers that share a
//! ledger across tasks wrap it in a single mutual-exclusion boundary.

pub mod error;
pub mod ledger;
pub mod types;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use types::{ContributionRecord, DebtRecord, Points, Timestamp};
