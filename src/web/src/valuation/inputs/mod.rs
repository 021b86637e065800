pub mod routes;

use crate::TerminalAppData;
use crate::valuation::evaluate;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use fcd_core::{DealAssessment, ValuationInputs, ValuationResult};
use serde::{Deserialize, Serialize};

/// Partial update from the terminal sliders. Absent fields keep their
/// current value; present ones are clamped by the input setters.
#[derive(Deserialize)]
pub struct InputsUpdateRequest {
    pub anchor_value: Option<f64>,
    pub professionalism_risk: Option<f64>,
}

#[derive(Serialize)]
pub struct InputsUpdateResponse {
    pub inputs: ValuationInputs,
    pub valuation: ValuationResult,
    pub deal: DealAssessment,
}

pub async fn inputs_update_action(
    State(state): State<TerminalAppData>,
    Json(request): Json<InputsUpdateRequest>,
) -> impl IntoResponse {
    let mut guard = state.state.write().await;

    if let Some(value) = request.anchor_value {
        guard.inputs.set_anchor_value(value, &state.config);
    }

    if let Some(value) = request.professionalism_risk {
        guard.inputs.set_professionalism_risk(value);
    }

    let (valuation, deal) = evaluate(&state, &guard.inputs);

    Json(InputsUpdateResponse {
        inputs: guard.inputs.clone(),
        valuation,
        deal,
    })
}
