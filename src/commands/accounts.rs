// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Result, anyhow};
use rust_decimal::Decimal;

pub fn handle(store: &Store, ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let balance = parse_decimal(sub.get_one::<String>("balance").unwrap())?;
            ledger.add_account(name, balance)?;
            store.save_registries(ledger)?;
            println!("Added account '{}' with balance {}", name, fmt_money(&balance));
        }
        Some(("topup", sub)) => {
            let stages = sub
                .get_many::<String>("stage")
                .unwrap()
                .map(|s| parse_stage(s))
                .collect::<Result<Vec<_>>>()?;
            ledger.top_up_many(stages.iter().map(|(n, a)| (n.as_str(), *a)))?;
            store.save_registries(ledger)?;
            for (name, amount) in &stages {
                if *amount > Decimal::ZERO {
                    println!("Topped up '{}' by {}", name, fmt_money(amount));
                } else {
                    println!("Skipped '{}': amount {} is not positive", name, fmt_money(amount));
                }
            }
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &ledger.accounts)? {
                let rows = ledger
                    .accounts
                    .iter()
                    .map(|a| vec![a.name.clone(), fmt_money(&a.balance)])
                    .collect();
                println!("{}", pretty_table(&["Name", "Balance"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}

fn parse_stage(s: &str) -> Result<(String, Decimal)> {
    let (name, amount) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid stage '{}', expected NAME=AMOUNT", s))?;
    Ok((name.trim().to_string(), parse_decimal(amount.trim())?))
}
