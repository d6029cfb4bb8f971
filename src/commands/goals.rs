// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(store: &Store, ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let target = parse_decimal(sub.get_one::<String>("target").unwrap())?;
            let current = parse_decimal(sub.get_one::<String>("current").unwrap())?;
            ledger.add_goal(name, target, current)?;
            store.save_registries(ledger)?;
            println!(
                "Added goal '{}' ({} of {})",
                name,
                fmt_money(&current),
                fmt_money(&target)
            );
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &ledger.goals)? {
                let rows = ledger
                    .goals
                    .iter()
                    .map(|g| {
                        let progress = if g.target.is_zero() {
                            "-".to_string()
                        } else {
                            format!("{:.1}%", g.current / g.target * Decimal::from(100))
                        };
                        vec![
                            g.name.clone(),
                            fmt_money(&g.target),
                            fmt_money(&g.current),
                            progress,
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Name", "Target", "Current", "Progress"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}
