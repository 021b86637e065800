pub mod routes;

use crate::TerminalAppData;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use fcd_core::ScenarioImpact;
use serde::Serialize;

#[derive(Serialize)]
pub struct LedgerGetResponse {
    pub entries: Vec<ScenarioImpact>,
    pub total: usize,
}

pub async fn ledger_get_action(State(state): State<TerminalAppData>) -> impl IntoResponse {
    let guard = state.state.read().await;

    Json(LedgerGetResponse {
        entries: guard.ledger.recent().to_vec(),
        total: guard.ledger.len(),
    })
}
