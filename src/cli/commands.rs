use anyhow::Result;
use clap::Args;
use inquire::Password;
use log::debug;

use crate::{
    auth::AuthOutcome,
    confirm::AutoConfirmer,
    form::SubmitOutcome,
    models::{Category, Period, TransactionType},
    routing::{AuthState, Navigation, Route},
    state::AppState,
};

use super::{formatting::PrintFormatted, Command};

impl Command {
    /// Runs the command, returning whether it succeeded
    pub async fn run(self, state: &AppState) -> Result<bool> {
        match self {
            Command::Signup(cmd) => cmd.run(state).await,
            Command::Login(cmd) => cmd.run(state).await,
            Command::Logout(cmd) => cmd.run(state),
            Command::List(cmd) => cmd.run(state).await,
            Command::Add(cmd) => cmd.run(state).await,
            Command::Delete(cmd) => cmd.run(state).await,
        }
    }
}

/// Lists what the user can do instead after being sent elsewhere
fn redirected(state: &AppState, route: Route) -> Result<bool> {
    debug!("Redirected to {}", route.path());
    state.guard().nav_links().print_formatted();
    Ok(false)
}

fn password_or_prompt(password: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    let prompt = Password::new("Password:");
    let prompt = if confirm { prompt } else { prompt.without_confirmation() };
    Ok(prompt.prompt()?)
}

#[derive(Args, Debug)]
pub struct Signup {
    #[clap(short, long)]
    pub name: String,
    #[clap(short, long)]
    pub email: String,
    /// Prompted for when omitted
    #[clap(short, long)]
    pub password: Option<String>,
}

impl Signup {
    pub async fn run(self, state: &AppState) -> Result<bool> {
        let password = password_or_prompt(self.password, true)?;
        let outcome = state.auth().signup(&self.name, &self.email, &password).await;
        Ok(outcome != AuthOutcome::Stay)
    }
}

#[derive(Args, Debug)]
pub struct Login {
    #[clap(short, long)]
    pub email: String,
    /// Prompted for when omitted
    #[clap(short, long)]
    pub password: Option<String>,
}

impl Login {
    pub async fn run(self, state: &AppState) -> Result<bool> {
        let password = password_or_prompt(self.password, false)?;
        let outcome = state.auth().login(&self.email, &password).await;
        Ok(outcome != AuthOutcome::Stay)
    }
}

#[derive(Args, Debug)]
pub struct Logout {}

impl Logout {
    pub fn run(self, state: &AppState) -> Result<bool> {
        Ok(state.auth().logout() != AuthOutcome::Stay)
    }
}

#[derive(Args, Debug)]
pub struct ListTransactions {
    /// Only show transactions from the last day, week or month
    #[clap(short, long)]
    pub period: Option<Period>,
}

impl ListTransactions {
    pub async fn run(self, state: &AppState) -> Result<bool> {
        let dashboard = state.dashboard();
        let nav = match self.period {
            Some(period) if state.guard().auth_state() == AuthState::Authenticated => {
                dashboard.apply_filter(period).await
            },
            _ => dashboard.mount().await,
        };
        if let Navigation::Redirect(route) = nav {
            return redirected(state, route);
        }

        println!("");
        (dashboard.snapshot(), state.dt_provider.today()).print_formatted();
        println!("");
        Ok(true)
    }
}

#[derive(Args, Debug)]
pub struct AddTransaction {
    #[clap(short, long)]
    pub amount: String,
    /// One of food, transport, entertainment, shopping, utilities, healthcare, other
    #[clap(short, long)]
    pub category: String,
    #[clap(short, long)]
    pub description: Option<String>,
    #[clap(short = 't', long = "type")]
    pub tx_type: Option<TransactionType>,
    #[clap(short, long)]
    pub group: Option<String>,
    /// YYYY-MM-DD, defaults to today
    #[clap(long)]
    pub date: Option<String>,
}

impl AddTransaction {
    pub async fn run(self, state: &AppState) -> Result<bool> {
        let dashboard = state.dashboard();
        if let Navigation::Redirect(route) = dashboard.enter() {
            return redirected(state, route);
        }

        let form = state.form(dashboard.clone());
        let category = Category::parse(&self.category)
            .map(|cat| cat.as_str().to_string())
            .unwrap_or(self.category);

        form.update_field("amount", &self.amount)?;
        form.update_field("category", &category)?;
        if let Some(description) = self.description {
            form.update_field("description", &description)?;
        }
        if let Some(tx_type) = self.tx_type {
            form.update_field("type", tx_type.as_str())?;
        }
        if let Some(group) = self.group {
            form.update_field("group", &group)?;
        }
        if let Some(date) = self.date {
            form.update_field("date", &date)?;
        }

        match form.submit().await {
            SubmitOutcome::Submitted(_) => {
                println!("");
                (dashboard.snapshot(), state.dt_provider.today()).print_formatted();
                println!("");
                Ok(true)
            },
            SubmitOutcome::Invalid | SubmitOutcome::Failed => Ok(false),
        }
    }
}

#[derive(Args, Debug)]
pub struct DeleteTransaction {
    pub id: String,
    /// Skip the confirmation prompt
    #[clap(short, long)]
    pub yes: bool,
}

impl DeleteTransaction {
    pub async fn run(self, state: &AppState) -> Result<bool> {
        let state = if self.yes {
            AppState { confirmer: AutoConfirmer::new_dyn(), ..state.clone() }
        } else {
            state.clone()
        };

        let dashboard = state.dashboard();
        if let Navigation::Redirect(route) = dashboard.enter() {
            return redirected(&state, route);
        }

        match dashboard.delete(&self.id).await {
            Navigation::Redirect(route) => redirected(&state, route),
            Navigation::Allow(_) => Ok(true),
        }
    }
}
