use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{aggregator::{self, Summary}, models::{Period, Transaction}};

///
/// Everything the dashboard renders. `summary` always matches
/// `transactions`; both are replaced together on a successful fetch.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    /// Filter behind the current collection; `None` is the unfiltered list
    pub period: Option<Period>,
    pub loading: bool,
}

impl DashboardState {
    pub fn sorted_transactions(&self) -> Vec<Transaction> {
        aggregator::sort_by_date_descending(&self.transactions)
    }

    pub fn top_category(&self) -> Option<String> {
        aggregator::top_category(&self.transactions)
    }

    pub fn spent_in_month(&self, today: NaiveDate) -> Decimal {
        aggregator::spent_in_month(&self.transactions, today)
    }
}
