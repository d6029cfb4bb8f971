// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketbook::ledger::Ledger;
use pocketbook::models::{Transaction, TxKind};
use pocketbook::{cli, commands::transactions};
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn setup() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add_account("A1", dec("100")).unwrap();
    for i in 1..=3 {
        ledger
            .add_transaction(Transaction {
                date: d(&format!("2025-01-0{}", i)),
                kind: TxKind::Expense,
                category: "Cat1".to_string(),
                amount: dec("10"),
                account: Some("A1".to_string()),
                note: None,
            })
            .unwrap();
    }
    ledger
}

#[test]
fn list_limit_respected() {
    let ledger = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["pocketbook", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&ledger, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, "2025-01-03");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_month_filter_respected() {
    let mut ledger = setup();
    ledger
        .add_transaction(Transaction {
            date: d("2025-02-01"),
            kind: TxKind::Income,
            category: "Salary".to_string(),
            amount: dec("500"),
            account: None,
            note: None,
        })
        .unwrap();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["pocketbook", "tx", "list", "--month", "2025-01"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&ledger, list_m).unwrap();
            assert_eq!(rows.len(), 3);
            assert!(rows.iter().all(|r| r.date.starts_with("2025-01")));
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_rejects_malformed_month() {
    let ledger = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["pocketbook", "tx", "list", "--month", "January"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            assert!(transactions::query_rows(&ledger, list_m).is_err());
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn expense_add_requires_account_flag() {
    let cli = cli::build_cli();
    let res = cli.try_get_matches_from([
        "pocketbook", "tx", "add", "--date", "2025-01-01", "--kind", "expense", "--category",
        "Food", "--amount", "5",
    ]);
    assert!(res.is_err());

    let cli = cli::build_cli();
    let res = cli.try_get_matches_from([
        "pocketbook", "tx", "add", "--date", "2025-01-01", "--kind", "income", "--category",
        "Salary", "--amount", "5",
    ]);
    assert!(res.is_ok());
}
