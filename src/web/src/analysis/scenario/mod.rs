pub mod routes;

use crate::analysis::scenario_prompt;
use crate::valuation::evaluate;
use crate::{ApiError, ApiResult, TerminalAppData};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use fcd_core::{DealAssessment, ScenarioImpact, ScenarioSnapshot, ValuationInputs, ValuationResult};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ScenarioRequest {
    pub scenario: String,
}

#[derive(Serialize)]
pub struct ScenarioResponse {
    pub impact: ScenarioImpact,
    pub inputs: ValuationInputs,
    pub valuation: ValuationResult,
    pub deal: DealAssessment,
}

pub async fn analysis_scenario_action(
    State(state): State<TerminalAppData>,
    Json(request): Json<ScenarioRequest>,
) -> ApiResult<impl IntoResponse> {
    let scenario = request.scenario.trim().to_string();
    if scenario.is_empty() {
        return Err(ApiError::BadRequest(
            "Please enter a scenario prompt before submitting.".to_string(),
        ));
    }

    let snapshot = {
        let guard = state.state.read().await;
        let (valuation, _) = evaluate(&state, &guard.inputs);
        ScenarioSnapshot::build(&state.database.profile, &valuation)
    };

    let prompt = scenario_prompt(&snapshot, &scenario);
    let text = state.gemini.generate(&prompt, Some("application/json")).await?;

    let value: serde_json::Value = serde_json::from_str(&text).map_err(|_| {
        ApiError::UnprocessableEntity("Gemini did not return valid JSON.".to_string())
    })?;

    let impact: ScenarioImpact = serde_json::from_value(value).map_err(|_| {
        ApiError::UnprocessableEntity("Gemini scenario response was invalid.".to_string())
    })?;

    // State is only touched once the impact decoded cleanly.
    let mut guard = state.state.write().await;
    let terminal = &mut *guard;
    terminal.ledger.apply(&mut terminal.inputs, impact.clone());

    let (valuation, deal) = evaluate(&state, &terminal.inputs);

    Ok(Json(ScenarioResponse {
        impact,
        inputs: terminal.inputs.clone(),
        valuation,
        deal,
    }))
}
