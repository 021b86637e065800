use fcd_core::TerminalConfig;
use fcd_core::utils::TimeEstimation;
use database::DatabaseLoader;
use env_logger::Env;
use log::{info, warn};
use std::env;
use std::sync::Arc;
use tokio::sync::RwLock;
use web::{GeminiClient, TerminalAppData, TerminalState, ValuationTerminalServer};

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3000);

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

    info!("database loaded: {} ms", estimated);

    for warning in &database.validation.warnings {
        warn!("data warning: {}", warning);
    }

    let config = TerminalConfig::default();

    let data = TerminalAppData {
        database: Arc::new(database),
        state: Arc::new(RwLock::new(TerminalState::new(&config))),
        config: Arc::new(config),
        gemini: Arc::new(GeminiClient::new()),
    };

    ValuationTerminalServer::new(data, port).run().await;
}
