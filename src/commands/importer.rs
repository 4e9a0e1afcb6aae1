// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;

use super::{required, warn_if_degraded};
use crate::models::ExpenseDraft;
use crate::query::CSV_HEADER;
use crate::store::ExpenseStore;
use crate::utils::today;

/// Imports a CSV laid out like our own export: Date,Category,Description,Amount.
/// Every row is validated before anything is written.
pub fn import(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let path = required(sub, "path")?.trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let header = rdr
        .headers()
        .with_context(|| format!("Read header of {}", path))?
        .iter()
        .collect::<Vec<_>>()
        .join(",");
    if header != CSV_HEADER {
        bail!("Unexpected CSV header '{}', expected {}", header, CSV_HEADER);
    }

    let today = today();
    let mut inputs = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        // header is line 1
        let line = i + 2;
        let rec = result.with_context(|| format!("Read line {}", line))?;
        let draft = ExpenseDraft {
            date: rec.get(0).context("date missing")?.to_string(),
            category: rec.get(1).context("category missing")?.to_string(),
            description: rec.get(2).context("description missing")?.to_string(),
            amount: rec.get(3).context("amount missing")?.to_string(),
        };
        let input = draft
            .validate(today)
            .with_context(|| format!("Invalid expense on line {}", line))?;
        inputs.push(input);
    }

    let n = inputs.len();
    for input in inputs {
        store.create(input);
        warn_if_degraded(store);
    }
    println!("Imported {} expenses from {}", n, path);
    Ok(())
}
