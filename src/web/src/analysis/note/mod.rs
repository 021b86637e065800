pub mod routes;

use crate::analysis::analyst_prompt;
use crate::valuation::evaluate;
use crate::{ApiResult, TerminalAppData};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use fcd_core::ValuationSummary;
use serde::Serialize;

#[derive(Serialize)]
pub struct AnalysisNoteResponse {
    pub analysis: String,
}

pub async fn analysis_note_action(
    State(state): State<TerminalAppData>,
) -> ApiResult<impl IntoResponse> {
    let summary = {
        let guard = state.state.read().await;
        let (valuation, deal) = evaluate(&state, &guard.inputs);
        ValuationSummary::build(&state.database.profile, &valuation, &deal)
    };

    let prompt = analyst_prompt(&summary);
    let text = state.gemini.generate(&prompt, None).await?;

    let analysis = if text.is_empty() {
        "Gemini returned no text.".to_string()
    } else {
        text
    };

    Ok(Json(AnalysisNoteResponse { analysis }))
}
