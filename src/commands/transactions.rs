// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::{Transaction, TxKind};
use crate::store::Store;
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_decimal, parse_kind, parse_month, pretty_table,
};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &Store, ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let account = sub.get_one::<String>("account").map(|s| s.to_string());
    let note = sub.get_one::<String>("note").map(|s| s.to_string());

    let tx = Transaction {
        date,
        kind,
        category,
        amount,
        account,
        note,
    };
    ledger.add_transaction(tx.clone())?;
    store.append_transaction(&tx)?;
    if tx.kind == TxKind::Expense && tx.account.is_some() {
        // the debit changed a balance
        store.save_registries(ledger)?;
    }
    match &tx.account {
        Some(acct) => println!(
            "Recorded {} {} in '{}' on {} (acct: {})",
            tx.kind,
            fmt_money(&tx.amount),
            tx.category,
            tx.date,
            acct
        ),
        None => println!(
            "Recorded {} {} in '{}' on {}",
            tx.kind,
            fmt_money(&tx.amount),
            tx.category,
            tx.date
        ),
    }
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.account.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Kind", "Category", "Amount", "Account", "Note"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub account: String,
    pub note: String,
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m)?),
        None => None,
    };
    let account = sub.get_one::<String>("account");
    let category = sub.get_one::<String>("category");
    let limit = sub.get_one::<usize>("limit").copied();

    let mut picked: Vec<&Transaction> = ledger
        .transactions
        .iter()
        .filter(|t| {
            month
                .as_deref()
                .is_none_or(|m| t.date.format("%Y-%m").to_string() == m)
        })
        .filter(|t| account.is_none_or(|a| t.account.as_deref() == Some(a.as_str())))
        .filter(|t| category.is_none_or(|c| t.category == *c))
        .collect();
    // newest first; later entries win date ties
    picked.sort_by_key(|t| t.date);
    picked.reverse();
    if let Some(limit) = limit {
        picked.truncate(limit);
    }

    Ok(picked
        .into_iter()
        .map(|t| TransactionRow {
            date: t.date.to_string(),
            kind: t.kind.to_string(),
            category: t.category.clone(),
            amount: t.amount.to_string(),
            account: t.account.clone().unwrap_or_default(),
            note: t.note.clone().unwrap_or_default(),
        })
        .collect())
}
