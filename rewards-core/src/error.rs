//! Error types for the rewards ledger

use thiserror::Error;

use crate::types::Points;

/// Ledger operation errors
///
/// Every failure is detected before any state mutation, so a rejected
/// transaction leaves the ledger untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("points for payer {payer} cannot go negative")]
    NegativeSponsorBalance { payer: String },

    #[error("cannot spend {requested} points, only {available} available")]
    InsufficientBalance { requested: Points, available: Points },
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
