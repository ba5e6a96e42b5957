//! Stateless summaries and groupings derived from a transaction sequence.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::ledger::{CategoryShare, MonthTotals, Summary, Transaction, TransactionKind, YearMonth};

const PERCENT_SCALE: u32 = 2;

/// Pure functions over `&[Transaction]`; nothing here mutates its input.
pub struct Aggregator;

impl Aggregator {
    /// Partitions by kind and derives the balance fresh from the sequence.
    pub fn summarize(transactions: &[Transaction]) -> Summary {
        let mut summary = Summary::default();
        for txn in transactions {
            match txn.kind() {
                TransactionKind::Income => {
                    summary.income_total += txn.amount();
                    summary.income_count += 1;
                }
                TransactionKind::Expense => {
                    summary.expense_total += txn.amount();
                    summary.expense_count += 1;
                }
            }
        }
        summary.balance = summary.income_total - summary.expense_total;
        summary
    }

    /// Sums amounts of the given kind per normalized category.
    pub fn group_by_category(
        transactions: &[Transaction],
        kind: TransactionKind,
    ) -> BTreeMap<String, Decimal> {
        let mut groups: BTreeMap<String, Decimal> = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.kind() == kind) {
            *groups.entry(txn.category().to_string()).or_default() += txn.amount();
        }
        groups
    }

    /// Buckets by calendar month of `created_at`. Only months holding at least
    /// one transaction appear; the other kind reports zero in those months.
    pub fn group_by_month(transactions: &[Transaction]) -> BTreeMap<YearMonth, MonthTotals> {
        let mut months: BTreeMap<YearMonth, MonthTotals> = BTreeMap::new();
        for txn in transactions {
            let bucket = months.entry(YearMonth::of(txn.created_at())).or_default();
            match txn.kind() {
                TransactionKind::Income => bucket.income_total += txn.amount(),
                TransactionKind::Expense => bucket.expense_total += txn.amount(),
            }
        }
        months
    }

    /// Per-category totals with their percentage of the kind's grand total,
    /// largest first. Shares are rounded to two decimal places.
    pub fn category_shares(
        transactions: &[Transaction],
        kind: TransactionKind,
    ) -> Vec<CategoryShare> {
        let groups = Self::group_by_category(transactions, kind);
        let grand_total: Decimal = groups.values().copied().sum();
        let mut shares: Vec<CategoryShare> = groups
            .into_iter()
            .map(|(category, total)| {
                let share_percent = if grand_total.is_zero() {
                    Decimal::ZERO
                } else {
                    (total * Decimal::ONE_HUNDRED / grand_total).round_dp(PERCENT_SCALE)
                };
                CategoryShare {
                    category,
                    total,
                    share_percent,
                }
            })
            .collect();
        shares.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });
        shares
    }
}
