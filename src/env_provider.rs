use std::{env, sync::Arc};

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Environment variable {0} is not set or is not valid unicode")]
    VarNotFound(String),
}

pub type DynEnvProvider = Arc<dyn EnvProvider + Send + Sync>;

#[cfg_attr(test, automock)]
pub trait EnvProvider {
    fn get_var(&self, key: &str) -> Result<String>;
}

pub struct CoreEnvProvider;

impl CoreEnvProvider {
    /// Loads `.env` from the working directory (if any) before exposing the process environment
    pub fn new_dyn() -> DynEnvProvider {
        dotenvy::dotenv().ok();
        Arc::new(CoreEnvProvider)
    }
}

impl EnvProvider for CoreEnvProvider {
    fn get_var(&self, key: &str) -> Result<String> {
        env::var(key).map_err(|_| Error::VarNotFound(key.to_string()))
    }
}
