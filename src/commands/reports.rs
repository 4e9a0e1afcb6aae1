// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use super::warn_if_degraded;
use crate::insights::{overview, quick_insights, QuickInsights, SpendingOverview};
use crate::models::CategorySummary;
use crate::query::{format_currency, format_percentage, summarize_by_category};
use crate::store::ExpenseStore;
use crate::utils::{maybe_print_json, parse_date, percent_bar, pretty_table, today};

#[derive(Serialize)]
pub struct Summary {
    pub overview: SpendingOverview,
    pub insights: Option<QuickInsights>,
}

pub fn summary_data(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<Summary> {
    let reference = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let all = store.list();
    warn_if_degraded(store);
    Ok(Summary {
        overview: overview(&all, reference),
        insights: quick_insights(&all, reference),
    })
}

pub fn summary(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let data = summary_data(store, sub)?;
    if maybe_print_json(sub.get_flag("json"), false, &data)? {
        return Ok(());
    }

    let o = &data.overview;
    let trend = if o.last_month.is_zero() {
        "n/a".to_string()
    } else {
        let t = o.trend_percent.round_dp(1);
        let sign = if t > Decimal::ZERO { "+" } else { "" };
        format!("{}{}% vs last month", sign, t)
    };
    let mut rows = vec![
        vec!["Total spending".into(), format_currency(o.total)],
        vec!["This month".into(), format_currency(o.this_month)],
        vec!["Last month".into(), format_currency(o.last_month)],
        vec!["Trend".into(), trend],
        vec!["Expenses".into(), o.count.to_string()],
        vec!["Average per expense".into(), format_currency(o.average)],
    ];
    match &data.insights {
        Some(q) => {
            rows.push(vec![
                "Most active category".into(),
                q.most_active_category.to_string(),
            ]);
            rows.push(vec!["Total this week".into(), format_currency(q.week_total)]);
            rows.push(vec!["Largest expense".into(), format_currency(q.largest)]);
        }
        None => rows.push(vec![
            "Insights".into(),
            "Add your first expense to see insights".into(),
        ]),
    }
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}

pub fn breakdown_data(store: &ExpenseStore) -> Vec<CategorySummary> {
    let all = store.list();
    warn_if_degraded(store);
    summarize_by_category(&all)
}

pub fn breakdown(store: &ExpenseStore, sub: &clap::ArgMatches) -> Result<()> {
    let data = breakdown_data(store);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No expenses to display");
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|s| {
            vec![
                s.category.to_string(),
                format_currency(s.total),
                s.count.to_string(),
                format_percentage(s.percentage),
                percent_bar(s.percentage, 20),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Total", "Count", "Share", ""], rows)
    );
    Ok(())
}
