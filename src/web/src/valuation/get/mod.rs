pub mod routes;

use crate::TerminalAppData;
use crate::valuation::evaluate;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use fcd_core::{DealAssessment, ValuationInputs, ValuationResult};
use serde::Serialize;

#[derive(Serialize)]
pub struct ValuationGetResponse {
    pub inputs: ValuationInputs,
    pub valuation: ValuationResult,
    pub deal: DealAssessment,
}

pub async fn valuation_get_action(State(state): State<TerminalAppData>) -> impl IntoResponse {
    let guard = state.state.read().await;
    let (valuation, deal) = evaluate(&state, &guard.inputs);

    Json(ValuationGetResponse {
        inputs: guard.inputs.clone(),
        valuation,
        deal,
    })
}
