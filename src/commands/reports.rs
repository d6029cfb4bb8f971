// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::summary;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("savings", sub)) => savings(ledger, sub)?,
        Some(("by-category", sub)) => by_category(ledger, sub)?,
        Some(("monthly", sub)) => monthly(ledger, sub)?,
        Some(("net-balance", sub)) => net_balance(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn savings(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let total = summary::total_savings(ledger);
    let fixed = summary::total_fixed_expenses(ledger);
    if json_flag || jsonl_flag {
        let v = serde_json::json!({
            "total_savings": total,
            "total_fixed_expenses": fixed,
        });
        maybe_print_json(json_flag, jsonl_flag, &v)?;
    } else {
        let rows = vec![
            vec!["Total savings".to_string(), fmt_money(&total)],
            vec!["Fixed expenses".to_string(), fmt_money(&fixed)],
        ];
        println!("{}", pretty_table(&["Measure", "Amount"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
struct CategoryRow {
    category: String,
    total: Decimal,
}

fn by_category(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut items: Vec<(String, Decimal)> = summary::expenses_by_category(ledger)
        .into_iter()
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    let data: Vec<CategoryRow> = items
        .into_iter()
        .map(|(category, total)| CategoryRow { category, total })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|r| vec![r.category.clone(), fmt_money(&r.total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn monthly(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = summary::monthly_spending_by_category(ledger);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|r| vec![r.month.clone(), r.category.clone(), fmt_money(&r.total)])
            .collect();
        println!("{}", pretty_table(&["Month", "Category", "Spent"], rows));
    }
    Ok(())
}

fn net_balance(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let deduct_fixed = sub.get_flag("deduct-fixed");
    let series = summary::net_balance_series(ledger, deduct_fixed);
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let rows = series
            .iter()
            .map(|p| vec![p.date.to_string(), fmt_money(&p.balance)])
            .collect();
        println!("{}", pretty_table(&["Date", "Net balance"], rows));
    }
    Ok(())
}
