// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;
use env_logger::Env;

use spendbook::storage::{SqliteStorage, UnavailableStorage};
use spendbook::store::ExpenseStore;
use spendbook::{cli, commands, db};

fn open_store(path: Option<&PathBuf>) -> ExpenseStore {
    match db::open_or_init(path.map(PathBuf::as_path)) {
        Ok(conn) => ExpenseStore::new(SqliteStorage::new(conn)),
        Err(e) => {
            log::warn!("{:#}; continuing without persistence", e);
            ExpenseStore::new(UnavailableStorage)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();
    let db_arg = matches.get_one::<PathBuf>("db");

    if let Some(("init", _)) = matches.subcommand() {
        db::open_or_init(db_arg.map(PathBuf::as_path))?;
        match db_arg {
            Some(p) => println!("Database initialized at {}", p.display()),
            None => println!("Database initialized at {}", db::db_path()?.display()),
        }
        return Ok(());
    }

    let store = open_store(db_arg);
    match matches.subcommand() {
        Some(("add", sub)) => commands::expenses::add(&store, sub)?,
        Some(("edit", sub)) => commands::expenses::edit(&store, sub)?,
        Some(("rm", sub)) => commands::expenses::remove(&store, sub)?,
        Some(("list", sub)) => commands::expenses::list(&store, sub)?,
        Some(("summary", sub)) => commands::reports::summary(&store, sub)?,
        Some(("breakdown", sub)) => commands::reports::breakdown(&store, sub)?,
        Some(("export", sub)) => commands::exporter::export(&store, sub)?,
        Some(("import", sub)) => commands::importer::import(&store, sub)?,
        Some(("clear", sub)) => commands::maintenance::clear(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
