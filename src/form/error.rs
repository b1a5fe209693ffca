use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown draft field '{0}'")]
    UnknownField(String),
    #[error("Invalid transaction type: {0}")]
    InvalidType(String),
}
