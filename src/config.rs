use std::{fs, io, path::{Path, PathBuf}};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::env_provider::DynEnvProvider;

pub const CONFIG_FILE: &'static str = "config.json";
pub const API_URL_ENV: &'static str = "EXPENSE_API_URL";
pub const TOKEN_FILE_ENV: &'static str = "EXPENSE_TOKEN_FILE";

const DEFAULT_API_URL: &'static str = "http://localhost:8080";
const DEFAULT_TOKEN_FILENAME: &'static str = "session.json";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not read config file {0}: {1}")]
    ReadError(PathBuf, io::Error),
    #[error("Could not parse config file. Error: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Could not determine a data directory for the session token file")]
    NoDataDir,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub token_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_URL.to_string(),
            token_file: None,
        }
    }
}

impl Config {
    ///
    /// Builds the config from `path` (optional, defaults when missing),
    /// then applies any environment overrides.
    ///
    pub fn load(path: &Path, env_provider: &DynEnvProvider) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)
                .map_err(|err| Error::ReadError(path.to_path_buf(), err))?;
            serde_json::from_str::<Config>(&contents)?
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        if let Ok(url) = env_provider.get_var(API_URL_ENV) {
            config.api_base_url = url;
        }
        if let Ok(token_file) = env_provider.get_var(TOKEN_FILE_ENV) {
            config.token_file = Some(PathBuf::from(token_file));
        }

        Ok(config)
    }

    /// Command line values win over everything else
    pub fn with_overrides(mut self, api_base_url: Option<String>, token_file: Option<PathBuf>) -> Self {
        if let Some(url) = api_base_url { self.api_base_url = url; }
        if let Some(path) = token_file { self.token_file = Some(path); }
        self
    }

    pub fn token_file_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.token_file {
            return Ok(path.clone());
        }

        let proj_dirs = directories::ProjectDirs::from("io", "expense-dashboard", env!("CARGO_PKG_NAME"))
            .ok_or(Error::NoDataDir)?;
        Ok(proj_dirs.data_dir().join(DEFAULT_TOKEN_FILENAME))
    }
}

#[cfg(test)]
mod test {
    use std::{path::{Path, PathBuf}, sync::Arc};

    use crate::env_provider::{Error as EnvError, MockEnvProvider};

    use super::*;

    fn env_without_overrides() -> DynEnvProvider {
        let mut env = MockEnvProvider::new();
        env.expect_get_var().returning(|key| Err(EnvError::VarNotFound(key.to_string())));
        Arc::new(env)
    }

    #[test]
    fn test_defaults_when_file_missing() -> anyhow::Result<()> {
        let config = Config::load(Path::new("does-not-exist/config.json"), &env_without_overrides())?;
        assert_eq!(Config::default(), config);
        Ok(())
    }

    #[test]
    fn test_env_overrides_defaults() -> anyhow::Result<()> {
        let mut env = MockEnvProvider::new();
        env.expect_get_var()
            .withf(|key: &str| key == API_URL_ENV)
            .returning(|_| Ok(String::from("https://expenses.example.com")));
        env.expect_get_var()
            .withf(|key: &str| key == TOKEN_FILE_ENV)
            .returning(|_| Ok(String::from("/tmp/token.json")));
        let env: DynEnvProvider = Arc::new(env);

        let config = Config::load(Path::new("does-not-exist/config.json"), &env)?;
        assert_eq!("https://expenses.example.com", config.api_base_url);
        assert_eq!(Some(PathBuf::from("/tmp/token.json")), config.token_file);
        Ok(())
    }

    #[test]
    fn test_file_then_flags() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("expense-config-{}.json", uuid::Uuid::now_v7()));
        fs::write(&path, r#"{ "api_base_url": "http://files.example.com" }"#)?;

        let config = Config::load(&path, &env_without_overrides())?;
        fs::remove_file(&path)?;
        assert_eq!("http://files.example.com", config.api_base_url);
        assert_eq!(None, config.token_file);

        let config = config.with_overrides(Some(String::from("http://flag.example.com")), None);
        assert_eq!("http://flag.example.com", config.api_base_url);
        Ok(())
    }

    #[test]
    fn test_explicit_token_file_used() -> anyhow::Result<()> {
        let config = Config::default().with_overrides(None, Some(PathBuf::from("/var/tmp/tok.json")));
        assert_eq!(PathBuf::from("/var/tmp/tok.json"), config.token_file_path()?);
        Ok(())
    }
}
