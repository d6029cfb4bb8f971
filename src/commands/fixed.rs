// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::store::Store;
use crate::summary;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            ledger.add_fixed_expense(name, amount)?;
            store.save_registries(ledger)?;
            println!("Added fixed expense '{}' at {}", name, fmt_money(&amount));
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &ledger.fixed_expenses)? {
                let rows = ledger
                    .fixed_expenses
                    .iter()
                    .map(|f| vec![f.name.clone(), fmt_money(&f.amount)])
                    .collect();
                println!("{}", pretty_table(&["Name", "Amount"], rows));
                println!(
                    "Total: {}",
                    fmt_money(&summary::total_fixed_expenses(ledger))
                );
            }
        }
        _ => {}
    }
    Ok(())
}
