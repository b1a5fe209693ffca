use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// `{ data: Transaction[] }`; a missing or null `data` means no transactions
#[derive(Deserialize)]
pub struct ListResponseModel {
    #[serde(default)]
    pub data: Option<Vec<Transaction>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum InsertResponseModel {
    Wrapped { data: Transaction },
    Bare(Transaction),
}

impl From<InsertResponseModel> for Transaction {
    fn from(value: InsertResponseModel) -> Self {
        match value {
            InsertResponseModel::Wrapped { data } => data,
            InsertResponseModel::Bare(tx) => tx,
        }
    }
}

#[derive(Serialize)]
pub struct LoginRequestModel<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub struct LoginResponseModel {
    pub token: String,
}

#[derive(Serialize)]
pub struct SignupRequestModel<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub struct ErrorResponseModel {
    pub message: Option<String>,
}
