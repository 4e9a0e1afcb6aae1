// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, Expense};
use crate::query::{monthly_spending, percentage_of, sum_amounts, total_spending};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingOverview {
    pub total: Decimal,
    pub this_month: Decimal,
    pub last_month: Decimal,
    /// Month-over-month change in percent; negative means spending went down.
    pub trend_percent: Decimal,
    pub average: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickInsights {
    pub most_active_category: Category,
    pub average: Decimal,
    pub week_total: Decimal,
    pub largest: Decimal,
}

/// Inclusive on both ends.
pub fn spending_between(records: &[Expense], start: NaiveDate, end: NaiveDate) -> Decimal {
    sum_amounts(
        records
            .iter()
            .filter(|e| e.occurred_on >= start && e.occurred_on <= end)
            .map(|e| e.amount),
    )
}

/// Spending in the calendar month before the one containing `reference`.
pub fn previous_month_spending(records: &[Expense], reference: NaiveDate) -> Decimal {
    match reference.with_day(1).and_then(|first| first.pred_opt()) {
        Some(prev) => monthly_spending(records, prev),
        None => Decimal::ZERO,
    }
}

pub fn average_expense(records: &[Expense]) -> Decimal {
    if records.is_empty() {
        return Decimal::ZERO;
    }
    total_spending(records)
        .checked_div(Decimal::from(records.len()))
        .unwrap_or(Decimal::ZERO)
}

pub fn overview(records: &[Expense], reference: NaiveDate) -> SpendingOverview {
    let this_month = monthly_spending(records, reference);
    let last_month = previous_month_spending(records, reference);
    let trend_percent = if last_month > Decimal::ZERO {
        percentage_of(this_month.saturating_sub(last_month), last_month)
    } else {
        Decimal::ZERO
    };
    SpendingOverview {
        total: total_spending(records),
        this_month,
        last_month,
        trend_percent,
        average: average_expense(records),
        count: records.len(),
    }
}

/// Category with the most records; ties go to the one seen first.
pub fn most_active_category(records: &[Expense]) -> Option<Category> {
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for e in records {
        match counts.iter_mut().find(|(c, _)| *c == e.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((e.category, 1)),
        }
    }
    let mut best: Option<(Category, usize)> = None;
    for (c, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((c, n));
        }
    }
    best.map(|(c, _)| c)
}

pub fn quick_insights(records: &[Expense], reference: NaiveDate) -> Option<QuickInsights> {
    let most_active_category = most_active_category(records)?;
    let largest = records.iter().map(|e| e.amount).max()?;
    let week_start = reference
        .checked_sub_days(Days::new(7))
        .unwrap_or(NaiveDate::MIN);
    Some(QuickInsights {
        most_active_category,
        average: average_expense(records),
        week_total: spending_between(records, week_start, reference),
        largest,
    })
}
