// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pocketbook")
        .version(crate_version!())
        .about("Single-user expense tracking, account balances, savings goals, and spending reports")
        .subcommand(Command::new("init").about("Initialize the data directory"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add an account")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("balance").long("balance").default_value("0")),
                )
                .subcommand(
                    Command::new("topup")
                        .about("Top up one or more accounts")
                        .arg(
                            Arg::new("stage")
                                .long("stage")
                                .value_name("NAME=AMOUNT")
                                .action(ArgAction::Append)
                                .required(true)
                                .help("Staged top-up; repeat to batch several accounts"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List accounts"))),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["income", "expense"])
                                .required(true),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .required_if_eq("kind", "expense")
                                .help("Account to debit; required for expenses"),
                        )
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").value_name("YYYY-MM"))
                        .arg(Arg::new("account").long("account"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("fixed")
                .about("Manage recurring fixed expenses")
                .subcommand(
                    Command::new("add")
                        .about("Declare a fixed expense")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List fixed expenses"),
                )),
        )
        .subcommand(
            Command::new("goal")
                .about("Manage savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Declare a savings goal")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("current").long("current").default_value("0")),
                )
                .subcommand(json_flags(Command::new("list").about("List goals"))),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries over the ledger")
                .subcommand(json_flags(
                    Command::new("savings").about("Total savings and fixed expenses"),
                ))
                .subcommand(json_flags(
                    Command::new("by-category").about("Expense totals per category"),
                ))
                .subcommand(json_flags(
                    Command::new("monthly").about("Monthly spending per category"),
                ))
                .subcommand(json_flags(
                    Command::new("net-balance")
                        .about("Net balance over time, one point per transaction")
                        .arg(
                            Arg::new("deduct-fixed")
                                .long("deduct-fixed")
                                .action(ArgAction::SetTrue)
                                .help("Subtract the fixed-expense total from the baseline"),
                        ),
                )),
        )
        .subcommand(
            Command::new("import")
                .about("Import data from files")
                .subcommand(
                    Command::new("transactions")
                        .about("Import transactions from a CSV file")
                        .arg(Arg::new("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data to files")
                .subcommand(
                    Command::new("transactions")
                        .about("Export transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Report ledger consistency issues"))
}
