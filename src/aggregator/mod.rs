use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Category, Transaction, TransactionType};

pub use models::*;

pub mod models;


///
/// Totals per transaction type. Sums are order independent, and
/// `balance == total_received - total_spent` always holds.
///
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let (total_spent, total_received) = transactions.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(spent, received), tx| match tx.tx_type {
            TransactionType::Spent => (spent + tx.amount, received),
            TransactionType::Received => (spent, received + tx.amount),
        },
    );

    Summary { total_spent, total_received, balance: total_received - total_spent }
}

/// Most recent first. Stable: equal dates keep their input order.
pub fn sort_by_date_descending(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

pub fn category_color(category: &str) -> ColorToken {
    match Category::parse(category) {
        Some(Category::Food) => ColorToken::Orange,
        Some(Category::Transport) => ColorToken::Blue,
        Some(Category::Entertainment) => ColorToken::Purple,
        Some(Category::Shopping) => ColorToken::Pink,
        Some(Category::Utilities) => ColorToken::Yellow,
        Some(Category::Healthcare) => ColorToken::Red,
        Some(Category::Other) => ColorToken::Gray,
        None => ColorToken::Slate,
    }
}

/// Summed amount per category, in the order categories first appear
pub fn category_totals(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = vec![];
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tx in transactions {
        match index.get(tx.category.as_str()) {
            Some(&idx) => totals[idx].1 += tx.amount,
            None => {
                index.insert(tx.category.as_str(), totals.len());
                totals.push((tx.category.clone(), tx.amount));
            }
        }
    }

    totals
}

/// Category with the largest total; ties go to the one seen first
pub fn top_category(transactions: &[Transaction]) -> Option<String> {
    category_totals(transactions)
        .into_iter()
        .fold(None, |best: Option<(String, Decimal)>, (cat, total)| match best {
            Some((_, best_total)) if best_total >= total => best,
            _ => Some((cat, total)),
        })
        .map(|(cat, _)| cat)
}

/// Amount spent during the calendar month containing `today`
pub fn spent_in_month(transactions: &[Transaction], today: NaiveDate) -> Decimal {
    transactions.iter()
        .filter(|tx| tx.tx_type == TransactionType::Spent)
        .filter(|tx| tx.date.year() == today.year() && tx.date.month() == today.month())
        .map(|tx| tx.amount)
        .sum()
}
