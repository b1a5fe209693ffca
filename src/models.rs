use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use clap::ValueEnum;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

lazy_static! {
    // Server dates arrive either as `2024-01-01` or as a full ISO timestamp
    static ref DATE_PREFIX_RE: Regex = Regex::new(r"^\s*(\d{4}-\d{2}-\d{2})").unwrap();
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Spent,
    Received,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Spent => "spent",
            TransactionType::Received => "received",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spent" => Ok(Self::Spent),
            "received" => Ok(Self::Received),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

///
/// Categories the dashboard knows how to label and color.
/// Transactions keep their category as free text; use [`Category::parse`]
/// to map it onto this set.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Utilities,
    Healthcare,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Utilities,
        Category::Healthcare,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Utilities => "utilities",
            Category::Healthcare => "healthcare",
            Category::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|cat| cat.as_str().eq_ignore_ascii_case(raw))
    }
}

/// Server-side date range applied by the filter endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// A single recorded spend or income event, as returned by the expense service.
/// The client never edits one in place; every fetch replaces the whole collection.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub amount: Decimal,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    // Records created before income tracking existed carry no type
    #[serde(rename = "type", default)]
    pub tx_type: TransactionType,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
}

///
/// Insertable fields of a transaction, held as the raw text the user entered.
/// Serialized verbatim as the insert request body.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionDraft {
    pub amount: String,
    pub category: String,
    pub description: String,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub group: String,
    pub date: String,
}

impl TransactionDraft {
    pub fn empty(today: NaiveDate) -> Self {
        TransactionDraft {
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            tx_type: TransactionType::Spent,
            group: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
        }
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let caps = DATE_PREFIX_RE.captures(raw)?;
    NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid transaction date '{}'", raw)))
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_deserialize_server_transaction() -> anyhow::Result<()> {
        let tx: Transaction = serde_json::from_str(r#"{
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "amount": 250.5,
            "category": "food",
            "description": "Lunch",
            "type": "received",
            "group": "Family",
            "date": "2024-03-09T00:00:00.000Z"
        }"#)?;

        assert_eq!("65a1f0c2e4b0a1b2c3d4e5f6", tx.id);
        assert_eq!(dec!(250.5), tx.amount);
        assert_eq!(TransactionType::Received, tx.tx_type);
        assert_eq!(Some(String::from("Family")), tx.group);
        assert_eq!(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(), tx.date);

        Ok(())
    }

    #[test]
    fn test_deserialize_legacy_transaction() -> anyhow::Result<()> {
        // No type, no group, string amount, plain id
        let tx: Transaction = serde_json::from_str(r#"{
            "id": "abc",
            "amount": "100",
            "category": "transport",
            "date": "2024-01-01"
        }"#)?;

        assert_eq!("abc", tx.id);
        assert_eq!(dec!(100), tx.amount);
        assert_eq!(TransactionType::Spent, tx.tx_type);
        assert_eq!(None, tx.description);
        assert_eq!(None, tx.group);

        Ok(())
    }

    #[test]
    fn test_deserialize_bad_date_fails() {
        let res = serde_json::from_str::<Transaction>(r#"{
            "_id": "abc", "amount": 1, "category": "food", "date": "yesterday"
        }"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Some(Category::Food), Category::parse("food"));
        assert_eq!(Some(Category::Healthcare), Category::parse(" Healthcare "));
        assert_eq!(None, Category::parse("groceries"));
    }

    #[test]
    fn test_draft_serializes_type_field() -> anyhow::Result<()> {
        let draft = TransactionDraft::empty(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        let json = serde_json::to_value(&draft)?;

        assert_eq!("spent", json["type"]);
        assert_eq!("2024-05-01", json["date"]);
        assert_eq!("", json["amount"]);

        Ok(())
    }
}
