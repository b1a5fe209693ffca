use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not access session file {0}: {1}")]
    IoError(PathBuf, io::Error),
    #[error("Session file is not a valid key-value document. Error: {0}")]
    ParseError(#[from] serde_json::Error),
}
