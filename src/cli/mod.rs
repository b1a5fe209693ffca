use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use crate::config::{API_URL_ENV, TOKEN_FILE_ENV};

pub use commands::*;

pub mod commands;
pub mod formatting;

#[derive(Parser, Debug)]
#[clap(name = "expense-dashboard", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Base URL of the expense service
    #[clap(long, global = true, env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// File the session token is kept in
    #[clap(long, global = true, env = TOKEN_FILE_ENV)]
    pub token_file: Option<PathBuf>,

    /// Increase log output (-v, -vv, -vvv)
    #[clap(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account
    #[clap(name = "signup")]
    Signup(Signup),
    /// Log in and keep the session token
    #[clap(name = "login")]
    Login(Login),
    /// Forget the session token
    #[clap(name = "logout")]
    Logout(Logout),
    /// Show the dashboard
    #[clap(name = "list")]
    List(ListTransactions),
    /// Record a new transaction
    #[clap(name = "add")]
    Add(AddTransaction),
    /// Delete a transaction
    #[clap(name = "delete")]
    Delete(DeleteTransaction),
}
