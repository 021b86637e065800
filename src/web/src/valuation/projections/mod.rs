pub mod routes;

use crate::TerminalAppData;
use crate::valuation::evaluate;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Utc;
use fcd_core::{ProjectionBand, ProjectionBuilder, ProjectionRow};
use serde::Serialize;

#[derive(Serialize)]
pub struct ProjectionsResponse {
    pub rows: Vec<ProjectionRow>,
    pub band: Vec<ProjectionBand>,
}

pub async fn projections_get_action(State(state): State<TerminalAppData>) -> impl IntoResponse {
    let guard = state.state.read().await;
    let (valuation, _) = evaluate(&state, &guard.inputs);

    let contract_days = state
        .database
        .profile
        .contract_days_remaining(Utc::now().date_naive());

    let rows = ProjectionBuilder::build(&valuation, contract_days, &state.config);
    let band = ProjectionBuilder::band(&rows, valuation.interval_width);

    Json(ProjectionsResponse { rows, band })
}
