pub mod gemini;
pub mod note;
pub mod scenario;

pub use gemini::{GeminiClient, GeminiError};

use crate::TerminalAppData;
use axum::Router;
use fcd_core::{ScenarioSnapshot, ValuationSummary};

pub fn analysis_routes() -> Router<TerminalAppData> {
    Router::new()
        .merge(note::routes::routes())
        .merge(scenario::routes::routes())
}

pub(crate) fn analyst_prompt(summary: &ValuationSummary) -> String {
    format!(
        "You are a football valuation analyst. Provide a short analyst note with sections: Thesis, Bull case, Bear case, Key drivers, Confidence.\n\nSummary JSON:\n{}",
        serde_json::to_string_pretty(summary).unwrap_or_default()
    )
}

pub(crate) fn scenario_prompt(snapshot: &ScenarioSnapshot, scenario: &str) -> String {
    format!(
        "Given the current player state and scenario, return a JSON object with fields delta_value_eur_m, delta_confidence_points, ledger_entry_text, rationale.\n\nCurrent State:\n{}\n\nScenario: {}",
        serde_json::to_string_pretty(snapshot).unwrap_or_default(),
        scenario
    )
}
