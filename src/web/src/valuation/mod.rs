pub mod get;
pub mod inputs;
pub mod projections;

use crate::TerminalAppData;
use axum::Router;
use chrono::Utc;
use fcd_core::{DealAssessment, ValuationEngine, ValuationInputs, ValuationResult};

pub fn valuation_routes() -> Router<TerminalAppData> {
    Router::new()
        .merge(get::routes::routes())
        .merge(projections::routes::routes())
        .merge(inputs::routes::routes())
}

/// Full re-derivation for the given inputs, priced as of today. Cheap
/// enough to run on every request.
pub(crate) fn evaluate(
    data: &TerminalAppData,
    inputs: &ValuationInputs,
) -> (ValuationResult, DealAssessment) {
    let valuation = ValuationEngine::calculate(
        &data.database.profile,
        &data.database.history,
        &data.database.events,
        inputs,
        &data.config,
        Utc::now().date_naive(),
    );

    let deal = DealAssessment::from_valuation(&valuation, inputs.anchor_value);

    (valuation, deal)
}
