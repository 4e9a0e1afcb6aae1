// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};

use super::{required, warn_if_degraded};
use crate::models::{Expense, ExpenseDraft, ExpenseFilter, ExpenseInput};
use crate::query::{filter, format_currency, format_date, sort};
use crate::store::ExpenseStore;
use crate::utils::{
    maybe_print_json, parse_category_filter, parse_date, parse_sort_order, pretty_table, today,
};

pub fn add(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let today = today();
    let draft = ExpenseDraft {
        amount: required(sub, "amount")?.clone(),
        category: required(sub, "category")?.clone(),
        description: required(sub, "description")?.clone(),
        date: sub
            .get_one::<String>("date")
            .cloned()
            .unwrap_or_else(|| today.to_string()),
    };
    let input = draft.validate(today).context("Expense not recorded")?;
    let e = store.create(input);
    warn_if_degraded(store);
    println!(
        "Recorded {} on {} for '{}' ({}) id={}",
        format_currency(e.amount),
        format_date(e.occurred_on),
        e.description,
        e.category,
        e.id
    );
    Ok(())
}

pub fn edit(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?.trim();
    let current = store
        .list()
        .into_iter()
        .find(|e| e.id == id)
        .with_context(|| format!("Expense '{}' not found", id))?;

    let input = merge_edit(&current, sub)?;
    match store.update(id, input) {
        Some(e) => {
            warn_if_degraded(store);
            println!(
                "Updated {}: {} on {} for '{}' ({})",
                e.id,
                format_currency(e.amount),
                format_date(e.occurred_on),
                e.description,
                e.category
            );
            Ok(())
        }
        None => bail!("Expense '{}' not found", id),
    }
}

fn merge_edit(current: &Expense, sub: &clap::ArgMatches) -> Result<ExpenseInput> {
    let pick = |name: &str, fallback: String| -> String {
        sub.get_one::<String>(name).cloned().unwrap_or(fallback)
    };
    let draft = ExpenseDraft {
        amount: pick("amount", current.amount.to_string()),
        category: pick("category", current.category.to_string()),
        description: pick("description", current.description.clone()),
        date: pick("date", current.occurred_on.to_string()),
    };
    draft.validate(today()).context("Expense not updated")
}

pub fn remove(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?.trim();
    if !store.delete(id) {
        bail!("Expense '{}' not found", id);
    }
    warn_if_degraded(store);
    println!("Deleted expense {}", id);
    Ok(())
}

pub fn list(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    format_date(e.occurred_on),
                    e.category.to_string(),
                    e.description.clone(),
                    format_currency(e.amount),
                    e.id.clone(),
                ]
            })
            .collect();
        let n = rows.len();
        println!(
            "{}",
            pretty_table(&["Date", "Category", "Description", "Amount", "Id"], rows)
        );
        println!("{} expense{}", n, if n == 1 { "" } else { "s" });
    }
    Ok(())
}

pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<ExpenseFilter> {
    let mut criteria = ExpenseFilter {
        search_term: sub.get_one::<String>("search").cloned(),
        ..Default::default()
    };
    if let Some(cat) = sub.get_one::<String>("category") {
        criteria.category = parse_category_filter(cat)?;
    }
    if let Some(from) = sub.get_one::<String>("from") {
        criteria.start_date = Some(parse_date(from)?);
    }
    if let Some(to) = sub.get_one::<String>("to") {
        criteria.end_date = Some(parse_date(to)?);
    }
    Ok(criteria)
}

pub fn query_rows(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<Vec<Expense>> {
    let criteria = filter_from_args(sub)?;
    let order = match sub.get_one::<String>("order") {
        Some(o) => parse_sort_order(o)?,
        None => Default::default(),
    };

    let all = store.list();
    warn_if_degraded(store);
    let mut data = sort(&filter(&all, &criteria), order);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}
