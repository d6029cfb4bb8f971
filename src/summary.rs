// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read-side queries over the ledger. Everything here is pure: no
//! query mutates, and empty collections yield zero/empty, not errors.

use crate::ledger::Ledger;
use crate::models::{Transaction, TxKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub fn total_savings(ledger: &Ledger) -> Decimal {
    ledger.accounts.iter().map(|a| a.balance).sum()
}

pub fn total_fixed_expenses(ledger: &Ledger) -> Decimal {
    ledger.fixed_expenses.iter().map(|f| f.amount).sum()
}

pub fn expenses_by_category(ledger: &Ledger) -> HashMap<String, Decimal> {
    let mut agg: HashMap<String, Decimal> = HashMap::new();
    for tx in expense_rows(ledger) {
        *agg.entry(tx.category.clone()).or_insert(Decimal::ZERO) += tx.amount;
    }
    agg
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCategoryTotal {
    pub month: String,
    pub category: String,
    pub total: Decimal,
}

pub fn monthly_spending_by_category(ledger: &Ledger) -> Vec<MonthlyCategoryTotal> {
    let mut agg: BTreeMap<(String, String), Decimal> = BTreeMap::new();
    for tx in expense_rows(ledger) {
        let month = tx.date.format("%Y-%m").to_string();
        *agg.entry((month, tx.category.clone()))
            .or_insert(Decimal::ZERO) += tx.amount;
    }
    agg.into_iter()
        .map(|((month, category), total)| MonthlyCategoryTotal {
            month,
            category,
            total,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetBalancePoint {
    pub date: NaiveDate,
    pub balance: Decimal,
}

/// One point per transaction, date ascending. Each point is the current
/// savings total (snapshot at call time) plus the running sum of signed
/// deltas: +amount for income, -amount for expense. Date ties keep
/// input order. With `deduct_fixed` the baseline additionally subtracts
/// the fixed-expense total.
pub fn net_balance_series(ledger: &Ledger, deduct_fixed: bool) -> Vec<NetBalancePoint> {
    let mut baseline = total_savings(ledger);
    if deduct_fixed {
        baseline -= total_fixed_expenses(ledger);
    }
    let mut sorted: Vec<&Transaction> = ledger.transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut running = baseline;
    sorted
        .into_iter()
        .map(|tx| {
            match tx.kind {
                TxKind::Income => running += tx.amount,
                TxKind::Expense => running -= tx.amount,
            }
            NetBalancePoint {
                date: tx.date,
                balance: running,
            }
        })
        .collect()
}

fn expense_rows(ledger: &Ledger) -> impl Iterator<Item = &Transaction> {
    ledger
        .transactions
        .iter()
        .filter(|t| t.kind == TxKind::Expense)
}
