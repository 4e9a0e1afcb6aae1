// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};

use super::warn_if_degraded;
use crate::query::{sort, to_csv};
use crate::store::ExpenseStore;
use crate::utils::parse_sort_order;

pub fn export(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let mut expenses = store.list();
    warn_if_degraded(store);
    if expenses.is_empty() {
        bail!("No expenses to export");
    }
    if let Some(order) = sub.get_one::<String>("order") {
        expenses = sort(&expenses, parse_sort_order(order)?);
    }
    let csv = to_csv(&expenses);

    match sub.get_one::<String>("out") {
        Some(out) => {
            std::fs::write(out, csv.as_bytes())
                .with_context(|| format!("Write CSV to {}", out))?;
            println!("Exported {} expenses to {}", expenses.len(), out);
        }
        None => println!("{}", csv),
    }
    Ok(())
}
