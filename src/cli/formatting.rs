use std::io::{self, IsTerminal};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{aggregator, dashboard::DashboardState, models::Transaction, routing::NavLink};

const CURRENCY: &'static str = "₹";
const RESET: &'static str = "\x1b[0m";

pub trait PrintFormatted {
    fn print_formatted(&self);
}

fn money(amount: Decimal) -> String {
    format!("{}{:.2}", CURRENCY, amount)
}

fn colored_category(category: &str, color: bool) -> String {
    let padded = format!("{:<16}", category);
    if color {
        format!("{}{}{}", aggregator::category_color(category).ansi(), padded, RESET)
    } else {
        padded
    }
}

impl PrintFormatted for (DashboardState, NaiveDate) {
    fn print_formatted(&self) {
        let (state, today) = self;
        let top = state.top_category().unwrap_or_else(|| "None".to_string());
        let period = match state.period {
            Some(period) => format!("last {}", period),
            None => "all".to_string(),
        };

        println!("Showing:\t\t{}", period);
        println!("Total Spent:\t\t{}", money(state.summary.total_spent));
        println!("Total Received:\t\t{}", money(state.summary.total_received));
        println!("Balance:\t\t{}", money(state.summary.balance));
        println!("Top Category:\t\t{}", top);
        println!("This Month:\t\t{}", money(state.spent_in_month(*today)));
        println!("");
        state.sorted_transactions().print_formatted();
    }
}

impl PrintFormatted for Vec<Transaction> {
    fn print_formatted(&self) {
        if self.is_empty() {
            println!("No transactions found");
            return;
        }

        let color = io::stdout().is_terminal();
        println!(
            "{:<10}\t{:<26}\t{:<16}\t{:<9}\t{:>12}\t{:<12}\t{}",
            "Date", "ID", "Category", "Type", "Amount", "Group", "Description"
        );
        println!("{:-<120}", "-");

        for tx in self {
            println!(
                "{:<10}\t{:<26}\t{}\t{:<9}\t{:>12}\t{:<12}\t{}",
                tx.date.format("%Y-%m-%d"),
                tx.id,
                colored_category(&tx.category, color),
                tx.tx_type.as_str(),
                money(tx.amount),
                tx.group.as_deref().unwrap_or("-"),
                tx.description.as_deref().unwrap_or(""),
            );
        }
    }
}

impl PrintFormatted for Vec<NavLink> {
    fn print_formatted(&self) {
        let commands: Vec<&str> = self.iter()
            .map(|link| match link {
                NavLink::Dashboard => "list",
                NavLink::Logout => "logout",
                NavLink::Login => "login",
                NavLink::Signup => "signup",
            })
            .collect();
        println!("Available:\t\t{}", commands.join(", "));
    }
}
