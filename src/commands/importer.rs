// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::store::Store;
use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use rust_decimal::Decimal;

pub fn handle(store: &Store, ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(store, ledger, sub),
        _ => Ok(()),
    }
}

fn import_transactions(store: &Store, ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    // Validate the whole file before applying anything: a rejected row
    // must not leave a partially imported ledger behind.
    let mut rows: Vec<Transaction> = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let tx: Transaction = result.with_context(|| format!("Malformed row {} in {}", i + 1, path))?;
        if tx.amount < Decimal::ZERO {
            return Err(anyhow!("Row {}: negative amount '{}'", i + 1, tx.amount));
        }
        if let Some(name) = tx.account.as_deref() {
            if ledger.account(name).is_none() {
                return Err(anyhow!("Row {}: account '{}' not found", i + 1, name));
            }
        }
        rows.push(tx);
    }

    for tx in &rows {
        ledger.add_transaction(tx.clone())?;
        store.append_transaction(tx)?;
    }
    store.save_registries(ledger)?;
    println!("Imported {} transactions from {}", rows.len(), path);
    Ok(())
}
