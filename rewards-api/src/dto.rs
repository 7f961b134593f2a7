//! Data Transfer Objects for API requests and responses

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire format for transaction timestamps: ISO-8601 with a literal `Z`
/// UTC suffix, e.g. `2020-11-02T14:00:00Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a wire timestamp, strictly.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

// ============ Points DTOs ============

/// Add points request
#[derive(Debug, Deserialize)]
pub struct AddPointsRequest {
    /// Payer name
    pub payer: String,
    /// Points to add; negative values debit the payer
    pub points: i64,
    /// Transaction timestamp, `2020-11-02T14:00:00Z` format
    pub timestamp: String,
}

/// Add points response
#[derive(Debug, Serialize)]
pub struct AddPointsResponse {
    pub payer: String,
    pub points: i64,
    pub timestamp: String,
    /// Aggregate balance after the credit
    pub balance: i64,
}

/// Spend points request
#[derive(Debug, Deserialize)]
pub struct SpendPointsRequest {
    /// Points to spend; must be positive
    pub points: i64,
}

// The spend response and the balance response are plain payer->points
// JSON objects, serialized directly from the ledger's maps.

// ============ Health DTOs ============

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Aggregate spendable balance
    pub balance: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_accepts_wire_format() {
        let parsed = parse_timestamp("2020-11-02T14:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 11, 2, 14, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_rejects_other_formats() {
        assert!(parse_timestamp("2020-11-02 14:00:00").is_none());
        assert!(parse_timestamp("2020-11-02T14:00:00+00:00").is_none());
        assert!(parse_timestamp("2020-11-02T14:00:00").is_none());
        assert!(parse_timestamp("not a timestamp").is_none());
    }
}
