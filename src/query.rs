// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filtering, sorting, aggregation and export over a list of expenses.
//! Nothing here holds state; callers pass in whatever the store returned.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Category, CategoryFilter, CategorySummary, Expense, ExpenseFilter, SortOrder};

pub const CSV_HEADER: &str = "Date,Category,Description,Amount";

pub fn filter(records: &[Expense], criteria: &ExpenseFilter) -> Vec<Expense> {
    let term = criteria
        .search_term
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    records
        .iter()
        .filter(|e| match &term {
            Some(t) => {
                e.description.to_lowercase().contains(t.as_str())
                    || e.category.as_str().to_lowercase().contains(t.as_str())
            }
            None => true,
        })
        .filter(|e| match criteria.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => e.category == c,
        })
        .filter(|e| criteria.start_date.is_none_or(|start| e.occurred_on >= start))
        .filter(|e| criteria.end_date.is_none_or(|end| e.occurred_on <= end))
        .cloned()
        .collect()
}

/// Stable sort on date only; equal dates keep their input order either way.
pub fn sort(records: &[Expense], order: SortOrder) -> Vec<Expense> {
    let mut out = records.to_vec();
    match order {
        SortOrder::Asc => out.sort_by(|a, b| a.occurred_on.cmp(&b.occurred_on)),
        SortOrder::Desc => out.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on)),
    }
    out
}

/// Per-category totals, largest first. Categories without records are left out.
pub fn summarize_by_category(records: &[Expense]) -> Vec<CategorySummary> {
    let mut groups: Vec<(Category, Decimal, usize)> = Vec::new();
    for e in records {
        match groups.iter_mut().find(|(c, _, _)| *c == e.category) {
            Some((_, total, count)) => {
                *total = total.saturating_add(e.amount);
                *count += 1;
            }
            None => groups.push((e.category, e.amount, 1)),
        }
    }

    let grand_total = total_spending(records);
    let mut out: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(category, total, count)| CategorySummary {
            category,
            total,
            count,
            percentage: percentage_of(total, grand_total),
        })
        .collect();
    out.sort_by(|a, b| b.total.cmp(&a.total));
    out
}

pub fn total_spending(records: &[Expense]) -> Decimal {
    sum_amounts(records.iter().map(|e| e.amount))
}

/// Adds amounts, clamping at `Decimal::MAX` instead of overflowing.
pub fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |acc, a| acc.saturating_add(a))
}

/// Spending within the calendar month that contains `reference`.
pub fn monthly_spending(records: &[Expense], reference: NaiveDate) -> Decimal {
    sum_amounts(
        records
            .iter()
            .filter(|e| {
                e.occurred_on.year() == reference.year()
                    && e.occurred_on.month() == reference.month()
            })
            .map(|e| e.amount),
    )
}

/// Serializes rows in the given order; the caller sorts beforehand if needed.
pub fn to_csv(records: &[Expense]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for e in records {
        lines.push(format!(
            "{},{},\"{}\",{}",
            e.occurred_on.format("%Y-%m-%d"),
            e.category,
            e.description.replace('"', "\"\""),
            format_amount(e.amount),
        ));
    }
    lines.join("\n")
}

/// `total` as a share of `grand_total` in percent; zero when there is nothing to share.
pub fn percentage_of(total: Decimal, grand_total: Decimal) -> Decimal {
    if grand_total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    total
        .checked_div(grand_total)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// en-US dollars with thousands separators: $1,234.56
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, dec_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}.{dec_part}")
    } else {
        format!("${grouped}.{dec_part}")
    }
}

/// Short en-US date: Mar 1, 2024
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// One decimal place, as shown in the category breakdown.
pub fn format_percentage(p: Decimal) -> String {
    format!(
        "{:.1}%",
        p.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    )
}
