mod analysis;
mod common;
mod error;
mod history;
mod ledger;
mod player;
mod routes;
mod status;
mod valuation;

pub use analysis::GeminiClient;
pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use fcd_core::{ScenarioLedger, TerminalConfig, ValuationInputs};
use database::DatabaseEntity;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct ValuationTerminalServer {
    data: TerminalAppData,
    port: u16,
}

impl ValuationTerminalServer {
    pub fn new(data: TerminalAppData, port: u16) -> Self {
        ValuationTerminalServer { data, port }
    }

    pub async fn run(&self) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        ).into_response()
                    }))
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("listen at: http://localhost:{}", self.port);

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            error!("Server stopped unexpectedly, but not crashing the process");
            // Don't panic here - just log and let the process stay alive
        }
    }
}

pub struct TerminalAppData {
    pub database: Arc<DatabaseEntity>,
    pub config: Arc<TerminalConfig>,
    pub state: Arc<RwLock<TerminalState>>,
    pub gemini: Arc<GeminiClient>,
}

/// Mutable terminal state. Handlers are the only mutation sites; reads
/// are full re-derivations through the engine, never cached values.
pub struct TerminalState {
    pub inputs: ValuationInputs,
    pub ledger: ScenarioLedger,
}

impl TerminalState {
    pub fn new(config: &TerminalConfig) -> Self {
        TerminalState {
            inputs: ValuationInputs::from_config(config),
            ledger: ScenarioLedger::new(),
        }
    }
}

impl Clone for TerminalAppData {
    fn clone(&self) -> Self {
        TerminalAppData {
            database: Arc::clone(&self.database),
            config: Arc::clone(&self.config),
            state: Arc::clone(&self.state),
            gemini: Arc::clone(&self.gemini),
        }
    }
}
