// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketbook::ledger::Ledger;
use pocketbook::store::Store;
use pocketbook::{cli, commands::importer};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn run_import(store: &Store, ledger: &mut Ledger, path: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["pocketbook", "import", "transactions", path]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(store, ledger, import_m)
    } else {
        panic!("no import subcommand");
    }
}

#[test]
fn import_applies_rows_and_debits_accounts() {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path().join("data")).unwrap();
    let mut ledger = Ledger::new();
    ledger.add_account("Bank A", dec("100")).unwrap();

    let csv_path = dir.path().join("in.csv");
    std::fs::write(
        &csv_path,
        "date,kind,category,amount,account,note\n\
         2025-02-01,expense,Food,25,Bank A,lunch\n\
         2025-02-03,income,Salary,1000,,\n",
    )
    .unwrap();

    run_import(&store, &mut ledger, &csv_path.to_string_lossy()).unwrap();

    assert_eq!(ledger.transactions.len(), 2);
    assert_eq!(ledger.account("Bank A").unwrap().balance, dec("75"));
    assert_eq!(ledger.transactions[1].account, None);
    assert_eq!(ledger.transactions[0].note.as_deref(), Some("lunch"));

    // the imported rows land in the journal and the registries persist
    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.transactions, ledger.transactions);
    assert_eq!(reloaded.account("Bank A").unwrap().balance, dec("75"));
}

#[test]
fn import_rejects_unknown_account_without_partial_apply() {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path().join("data")).unwrap();
    let mut ledger = Ledger::new();
    ledger.add_account("Bank A", dec("100")).unwrap();

    let csv_path = dir.path().join("in.csv");
    std::fs::write(
        &csv_path,
        "date,kind,category,amount,account,note\n\
         2025-02-01,expense,Food,25,Bank A,\n\
         2025-02-02,expense,Food,10,Ghost,\n",
    )
    .unwrap();

    let err = run_import(&store, &mut ledger, &csv_path.to_string_lossy()).unwrap_err();
    assert!(err.to_string().contains("Ghost"));
    assert!(ledger.transactions.is_empty());
    assert_eq!(ledger.account("Bank A").unwrap().balance, dec("100"));
    assert!(store.load().unwrap().transactions.is_empty());
}

#[test]
fn import_rejects_negative_amounts() {
    let dir = tempdir().unwrap();
    let store = Store::open_at(dir.path().join("data")).unwrap();
    let mut ledger = Ledger::new();

    let csv_path = dir.path().join("in.csv");
    std::fs::write(
        &csv_path,
        "date,kind,category,amount,account,note\n\
         2025-02-01,income,Salary,-5,,\n",
    )
    .unwrap();

    let err = run_import(&store, &mut ledger, &csv_path.to_string_lossy()).unwrap_err();
    assert!(err.to_string().contains("negative amount"));
    assert!(ledger.transactions.is_empty());
}
