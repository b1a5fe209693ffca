use std::{path::Path, process::ExitCode};

use expense_dashboard::{
    api_client::ReqwestApiClient,
    cli::Cli,
    config::{Config, CONFIG_FILE},
    confirm::InquireConfirmer,
    date_time_provider::CoreTimeProvider,
    env_provider::CoreEnvProvider,
    notifier::ConsoleNotifier,
    session::FileSessionStore,
    state::AppState,
};
use log::debug;
use reqwest::Client;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::init();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .init();

    let env_provider = CoreEnvProvider::new_dyn();
    let config = Config::load(Path::new(CONFIG_FILE), &env_provider)?
        .with_overrides(cli.api_url.clone(), cli.token_file.clone());
    debug!("Using expense service at {}", config.api_base_url);

    let session = FileSessionStore::new_dyn(config.token_file_path()?)?;
    let api = ReqwestApiClient::new_dyn(Client::new(), &config.api_base_url, session.clone());
    let app_state = AppState {
        session,
        api,
        notifier: ConsoleNotifier::new_dyn(),
        confirmer: InquireConfirmer::new_dyn(),
        dt_provider: CoreTimeProvider::new_dyn(),
    };

    Ok(if cli.command.run(&app_state).await? { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
