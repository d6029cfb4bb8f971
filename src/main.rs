// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pocketbook::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = store::Store::open_default()?;
    let mut ledger = store.load()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data directory initialized at {}", store.dir().display());
        }
        Some(("account", sub)) => commands::accounts::handle(&store, &mut ledger, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, &mut ledger, sub)?,
        Some(("fixed", sub)) => commands::fixed::handle(&store, &mut ledger, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&store, &mut ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("import", sub)) => commands::importer::handle(&store, &mut ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&ledger)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
