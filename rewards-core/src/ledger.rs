//! The ledger engine
//!
//! Three cooperating structures back a single account:
//! - an earn queue: min-heap of [`ContributionRecord`] ordered by
//!   `(timestamp, payer, points)`, the source of "oldest unspent first"
//! - a debt book: one min-heap of [`DebtRecord`] per payer, ordered by
//!   timestamp, holding withdrawals not yet matched to a contribution
//! - a totals index: net points per payer, used to reject credits that
//!   would drive a payer negative
//!
//! Debits are recorded at credit time and reconciled lazily during spend,
//! because events may arrive out of timestamp order: a debit's effect on a
//! specific contribution cannot be known until that contribution is about
//! to be consumed.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::types::{ContributionRecord, DebtRecord, Points, Timestamp};

/// Single-account reward-points ledger.
///
/// Synchronous and in-memory. Callers sharing a ledger across tasks must
/// guard each `credit`/`spend` call with one mutual-exclusion boundary;
/// a partially applied spend would break the oldest-first invariant.
#[derive(Debug, Default)]
pub struct Ledger {
    /// EarnQueue: globally ordered unspent contributions.
    earned: BinaryHeap<Reverse<ContributionRecord>>,
    /// DebtBook: pending withdrawals per payer. An absent key is an
    /// empty queue, never an error.
    debts: HashMap<String, BinaryHeap<Reverse<DebtRecord>>>,
    /// TotalsIndex: net contributed points per payer.
    totals: HashMap<String, Points>,
    /// Aggregate spendable balance; equals the sum of `totals` values.
    balance: Points,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points for a payer at a transaction timestamp.
    ///
    /// Positive `points` enqueue a contribution; negative `points` record
    /// a debt of the same magnitude against the payer, to be reconciled
    /// at spend time. Zero is a no-op on the record stores. Timestamps
    /// need not arrive in order.
    ///
    /// Fails with [`LedgerError::NegativeSponsorBalance`] and mutates
    /// nothing if the credit would take the payer's net total below zero.
    ///
    /// Returns the updated aggregate balance.
    pub fn credit(
        &mut self,
        payer: &str,
        points: Points,
        timestamp: Timestamp,
    ) -> LedgerResult<Points> {
        let current = self.totals.get(payer).copied().unwrap_or(0);
        if current + points < 0 {
            return Err(LedgerError::NegativeSponsorBalance {
                payer: payer.to_string(),
            });
        }

        if points > 0 {
            self.earned
                .push(Reverse(ContributionRecord::new(timestamp, payer, points)));
        } else if points < 0 {
            self.debts
                .entry(payer.to_string())
                .or_default()
                .push(Reverse(DebtRecord::new(timestamp, -points)));
        }

        self.balance += points;
        *self.totals.entry(payer.to_string()).or_insert(0) += points;

        debug!(
            payer,
            points,
            balance = self.balance,
            "credit applied"
        );

        Ok(self.balance)
    }

    /// Spend points, consuming the oldest contributions first across all
    /// payers, and return the per-payer deductions (values non-positive).
    ///
    /// Fails with [`LedgerError::InsufficientBalance`] and mutates nothing
    /// unless `points` is positive and within the aggregate balance.
    pub fn spend(&mut self, points: Points) -> LedgerResult<HashMap<String, Points>> {
        if points <= 0 || points > self.balance {
            return Err(LedgerError::InsufficientBalance {
                requested: points,
                available: self.balance,
            });
        }
        self.balance -= points;

        let mut to_spend = points;
        let mut deducted: HashMap<String, Points> = HashMap::new();

        while to_spend > 0 {
            // Matched debts only ever shrink the queue by amounts already
            // subtracted from the balance, so the queue covers the balance
            // and cannot run dry here; the guard keeps the loop total.
            let Some(Reverse(record)) = self.earned.pop() else {
                break;
            };
            let ContributionRecord {
                timestamp,
                payer,
                points: mut remaining,
            } = record;

            self.reconcile_debts(&payer, timestamp, &mut remaining);

            // Fully absorbed by the payer's debts.
            if remaining <= 0 {
                continue;
            }

            if remaining <= to_spend {
                to_spend -= remaining;
                *self.totals.entry(payer.clone()).or_insert(0) -= remaining;
                *deducted.entry(payer).or_insert(0) -= remaining;
            } else {
                // Partially consumed: the unspent remainder keeps its
                // original timestamp.
                self.earned.push(Reverse(ContributionRecord::new(
                    timestamp,
                    payer.clone(),
                    remaining - to_spend,
                )));
                *self.totals.entry(payer.clone()).or_insert(0) -= to_spend;
                *deducted.entry(payer).or_insert(0) -= to_spend;
                to_spend = 0;
            }
        }

        debug!(points, balance = self.balance, "spend applied");

        Ok(deducted)
    }

    /// Apply the payer's outstanding debts, oldest first, to a contribution
    /// that is about to be spent.
    ///
    /// A debt younger than the contribution reduces it; if the contribution
    /// cannot cover the debt, the unpaid remainder is pushed back and the
    /// negative `remaining` ends reconciliation. A debt whose timestamp is
    /// not after the contribution's is forgiven outright: every contribution
    /// that could have paid it was older and has already been spent.
    fn reconcile_debts(&mut self, payer: &str, timestamp: Timestamp, remaining: &mut Points) {
        let Some(queue) = self.debts.get_mut(payer) else {
            return;
        };

        while *remaining >= 0 {
            let Some(Reverse(debt)) = queue.pop() else {
                break;
            };
            if debt.timestamp > timestamp {
                *remaining -= debt.points;
                if *remaining < 0 {
                    queue.push(Reverse(DebtRecord::new(debt.timestamp, -*remaining)));
                }
            } else {
                debug!(
                    payer,
                    points = debt.points,
                    "forgiving debt with no older unspent contribution"
                );
            }
        }

        if queue.is_empty() {
            self.debts.remove(payer);
        }
    }

    /// Current aggregate spendable balance.
    pub fn balance(&self) -> Points {
        self.balance
    }

    /// Net contributed points per payer.
    pub fn payer_totals(&self) -> &HashMap<String, Points> {
        &self.totals
    }
}
