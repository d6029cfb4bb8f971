// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(ledger: &Ledger) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Transactions whose account reference no longer resolves
    for tx in &ledger.transactions {
        if let Some(name) = tx.account.as_deref() {
            if ledger.account(name).is_none() {
                rows.push(vec![
                    "stale_account_ref".into(),
                    format!("{} {} '{}'", tx.date, fmt_money(&tx.amount), name),
                ]);
            }
        }
    }

    // 2) Overdrawn accounts
    for acct in &ledger.accounts {
        if acct.balance < Decimal::ZERO {
            rows.push(vec![
                "negative_balance".into(),
                format!("{} {}", acct.name, fmt_money(&acct.balance)),
            ]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
