pub mod routes;

use crate::TerminalAppData;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use chrono::{NaiveDate, Utc};
use serde::Serialize;

/// Banner payload: non-fatal data warnings plus enough context for the
/// terminal header.
#[derive(Serialize)]
pub struct StatusGetResponse {
    pub player_id: String,
    pub evaluation_date: NaiveDate,
    pub validation_warnings: Vec<String>,
}

pub async fn status_get_action(State(state): State<TerminalAppData>) -> impl IntoResponse {
    Json(StatusGetResponse {
        player_id: state.database.profile.player_id.clone(),
        evaluation_date: Utc::now().date_naive(),
        validation_warnings: state.database.validation.warnings.clone(),
    })
}
