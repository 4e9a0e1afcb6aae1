// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn expense_fields(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("amount")
            .long("amount")
            .required(required)
            .allow_hyphen_values(true)
            .help("Positive amount, e.g. 12.50"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .required(required)
            .help("Food | Transportation | Entertainment | Shopping | Bills | Other"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .required(required)
            .help("What the money was spent on"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .help("YYYY-MM-DD (defaults to today)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendbook")
        .version(crate_version!())
        .about("Personal expense tracker")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_parser(value_parser!(std::path::PathBuf))
                .help("Database file (defaults to the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(expense_fields(
            Command::new("add").about("Record an expense"),
            true,
        ))
        .subcommand(expense_fields(
            Command::new("edit")
                .about("Change an expense; omitted fields keep their values")
                .arg(Arg::new("id").long("id").required(true)),
            false,
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete an expense")
                .arg(Arg::new("id").long("id").required(true)),
        )
        .subcommand(json_args(
            Command::new("list")
                .about("List expenses")
                .arg(
                    Arg::new("search")
                        .long("search")
                        .help("Match description or category, case-insensitive"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .help("Category name or All"),
                )
                .arg(Arg::new("from").long("from").help("Start date, inclusive"))
                .arg(Arg::new("to").long("to").help("End date, inclusive"))
                .arg(
                    Arg::new("order")
                        .long("order")
                        .default_value("desc")
                        .help("asc | desc"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("summary")
                .about("Totals, this month vs last month, quick insights")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Reference date (defaults to today)"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(json_args(
            Command::new("breakdown").about("Spending by category"),
        ))
        .subcommand(
            Command::new("export")
                .about("Export expenses as CSV")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output file (stdout when omitted)"),
                )
                .arg(
                    Arg::new("order")
                        .long("order")
                        .help("asc | desc (storage order when omitted)"),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import expenses from a CSV in export format")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("clear")
                .about("Delete every expense")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm"),
                ),
        )
}
