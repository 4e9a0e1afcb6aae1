// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use spendbook::insights::{most_active_category, overview, previous_month_spending, quick_insights};
use spendbook::models::{Category, CategoryFilter, Expense, ExpenseFilter, SortOrder};
use spendbook::query::{
    filter, monthly_spending, sort, summarize_by_category, to_csv, total_spending, CSV_HEADER,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse::<Decimal>().unwrap()
}

fn exp(id: &str, amount: &str, category: Category, description: &str, day: &str) -> Expense {
    Expense {
        id: id.to_string(),
        amount: dec(amount),
        category,
        description: description.to_string(),
        occurred_on: date(day),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    }
}

fn sample() -> Vec<Expense> {
    vec![
        exp("1", "4.50", Category::Food, "Morning coffee", "2024-03-05"),
        exp("2", "60", Category::Shopping, "Coffee grinder", "2024-02-20"),
        exp("3", "12", Category::Food, "Lunch", "2024-04-01"),
        exp("4", "45", Category::Bills, "Internet", "2024-03-15"),
        exp("5", "8", Category::Transportation, "Train", "2024-03-31"),
    ]
}

fn ids(records: &[Expense]) -> Vec<&str> {
    records.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn filter_combines_search_and_category() {
    let records = sample();
    let criteria = ExpenseFilter {
        search_term: Some("coffee".into()),
        category: CategoryFilter::Only(Category::Food),
        ..Default::default()
    };
    assert_eq!(ids(&filter(&records, &criteria)), vec!["1"]);
}

#[test]
fn search_is_case_insensitive_and_matches_category_name() {
    let records = sample();
    let by_desc = ExpenseFilter {
        search_term: Some("COFFEE".into()),
        ..Default::default()
    };
    assert_eq!(ids(&filter(&records, &by_desc)), vec!["1", "2"]);

    let by_category = ExpenseFilter {
        search_term: Some("bill".into()),
        ..Default::default()
    };
    assert_eq!(ids(&filter(&records, &by_category)), vec!["4"]);

    let empty_term = ExpenseFilter {
        search_term: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(filter(&records, &empty_term).len(), records.len());
}

#[test]
fn date_bounds_are_inclusive() {
    let records = sample();
    let criteria = ExpenseFilter {
        start_date: Some(date("2024-03-05")),
        end_date: Some(date("2024-03-31")),
        category: CategoryFilter::All,
        ..Default::default()
    };
    assert_eq!(ids(&filter(&records, &criteria)), vec!["1", "4", "5"]);
}

#[test]
fn all_category_filter_parses() {
    assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert_eq!(
        "food".parse::<CategoryFilter>().unwrap(),
        CategoryFilter::Only(Category::Food)
    );
    assert!("Groceries".parse::<CategoryFilter>().is_err());
}

#[test]
fn sort_by_date_both_ways() {
    let records = sample();
    assert_eq!(
        ids(&sort(&records, SortOrder::Desc)),
        vec!["3", "5", "4", "1", "2"]
    );
    assert_eq!(
        ids(&sort(&records, SortOrder::Asc)),
        vec!["2", "1", "4", "5", "3"]
    );
    assert_eq!(SortOrder::default(), SortOrder::Desc);
}

#[test]
fn sort_is_stable_for_equal_dates() {
    let records = vec![
        exp("A", "1", Category::Food, "first", "2024-01-01"),
        exp("X", "1", Category::Food, "later", "2024-02-01"),
        exp("B", "9", Category::Other, "second", "2024-01-01"),
    ];
    assert_eq!(ids(&sort(&records, SortOrder::Asc)), vec!["A", "B", "X"]);
    assert_eq!(ids(&sort(&records, SortOrder::Desc)), vec!["X", "A", "B"]);
}

#[test]
fn category_summary_orders_by_total_and_sums_to_100() {
    let records = sample();
    let summary = summarize_by_category(&records);
    let cats: Vec<Category> = summary.iter().map(|s| s.category).collect();
    assert_eq!(
        cats,
        vec![
            Category::Shopping,
            Category::Bills,
            Category::Food,
            Category::Transportation
        ]
    );

    let food = &summary[2];
    assert_eq!(food.total, dec("16.5"));
    assert_eq!(food.count, 2);

    let sum: Decimal = summary.iter().map(|s| s.percentage).sum();
    assert!((sum - Decimal::ONE_HUNDRED).abs() < dec("0.0001"));
}

#[test]
fn category_summary_edge_cases() {
    assert!(summarize_by_category(&[]).is_empty());
    assert_eq!(total_spending(&[]), Decimal::ZERO);

    let single = vec![
        exp("1", "3", Category::Bills, "Water", "2024-01-01"),
        exp("2", "7", Category::Bills, "Power", "2024-01-02"),
    ];
    let summary = summarize_by_category(&single);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].percentage, Decimal::ONE_HUNDRED);
    assert_eq!(summary[0].total, dec("10"));
}

#[test]
fn equal_thirds_sum_to_100_within_rounding() {
    let records = vec![
        exp("1", "10", Category::Food, "a", "2024-01-01"),
        exp("2", "10", Category::Bills, "b", "2024-01-01"),
        exp("3", "10", Category::Other, "c", "2024-01-01"),
    ];
    let sum: Decimal = summarize_by_category(&records)
        .iter()
        .map(|s| s.percentage)
        .sum();
    assert!((sum - Decimal::ONE_HUNDRED).abs() < dec("0.0001"));
}

#[test]
fn monthly_spending_uses_calendar_month() {
    let records = sample();
    // Feb 20 and Apr 1 are both within 30 days of mid-March but outside the month
    assert_eq!(monthly_spending(&records, date("2024-03-15")), dec("57.5"));
    assert_eq!(monthly_spending(&records, date("2024-04-30")), dec("12"));
    assert_eq!(monthly_spending(&records, date("2023-03-15")), Decimal::ZERO);
    assert_eq!(monthly_spending(&[], date("2024-03-15")), Decimal::ZERO);
}

#[test]
fn csv_escapes_description_and_pads_amount() {
    let records = vec![exp(
        "1",
        "12.5",
        Category::Food,
        "Lunch \"special\"",
        "2024-03-01",
    )];
    assert_eq!(
        to_csv(&records),
        "Date,Category,Description,Amount\n2024-03-01,Food,\"Lunch \"\"special\"\"\",12.50"
    );
}

#[test]
fn csv_keeps_input_order_and_quotes_commas() {
    let records = vec![
        exp("1", "3", Category::Other, "b, c", "2024-03-02"),
        exp("2", "1000", Category::Bills, "Rent", "2024-03-01"),
    ];
    let csv = to_csv(&records);
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[1], "2024-03-02,Other,\"b, c\",3.00");
    assert_eq!(lines[2], "2024-03-01,Bills,\"Rent\",1000.00");
    assert_eq!(to_csv(&[]), CSV_HEADER);
}

#[test]
fn overview_compares_with_previous_month() {
    let records = sample();
    let o = overview(&records, date("2024-03-20"));
    assert_eq!(o.total, dec("129.5"));
    assert_eq!(o.this_month, dec("57.5"));
    assert_eq!(o.last_month, dec("60"));
    assert_eq!(o.count, 5);
    assert_eq!(o.average, dec("25.9"));
    // (57.5 - 60) / 60 * 100
    assert_eq!(o.trend_percent.round_dp(2), dec("-4.17"));

    let none_before = overview(&records, date("2024-02-10"));
    assert_eq!(none_before.trend_percent, Decimal::ZERO);
    assert_eq!(
        previous_month_spending(&records, date("2024-01-31")),
        Decimal::ZERO
    );
}

#[test]
fn quick_insights_for_dashboard() {
    assert!(quick_insights(&[], date("2024-03-20")).is_none());

    let records = sample();
    let q = quick_insights(&records, date("2024-04-03")).unwrap();
    assert_eq!(q.most_active_category, Category::Food);
    assert_eq!(q.largest, dec("60"));
    // Mar 27 ..= Apr 3
    assert_eq!(q.week_total, dec("20"));
}

#[test]
fn most_active_ties_go_to_first_seen() {
    let records = vec![
        exp("1", "1", Category::Bills, "a", "2024-01-01"),
        exp("2", "1", Category::Food, "b", "2024-01-01"),
        exp("3", "1", Category::Food, "c", "2024-01-01"),
        exp("4", "1", Category::Bills, "d", "2024-01-01"),
    ];
    assert_eq!(most_active_category(&records), Some(Category::Bills));
}

#[test]
fn huge_stored_amounts_saturate_instead_of_panicking() {
    let records = vec![
        exp("1", "50000000000000000000000000000", Category::Food, "a", "2024-03-01"),
        exp("2", "50000000000000000000000000000", Category::Food, "b", "2024-03-02"),
    ];
    assert_eq!(total_spending(&records), Decimal::MAX);
    assert_eq!(monthly_spending(&records, date("2024-03-10")), Decimal::MAX);

    let summary = summarize_by_category(&records);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].total, Decimal::MAX);
    assert_eq!(summary[0].count, 2);
    assert_eq!(summary[0].percentage, dec("100"));

    let o = overview(&records, date("2024-03-10"));
    assert_eq!(o.total, Decimal::MAX);
    assert!(quick_insights(&records, date("2024-03-03")).is_some());
}
