pub mod routes;

use crate::TerminalAppData;
use crate::valuation::evaluate;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use fcd_core::{PlayerProfile, player_summary_lines};
use serde::Serialize;

#[derive(Serialize)]
pub struct PlayerGetResponse {
    pub profile: PlayerProfile,
    pub meta: String,
    pub summary: Vec<String>,
}

pub async fn player_get_action(State(state): State<TerminalAppData>) -> impl IntoResponse {
    let guard = state.state.read().await;
    let (valuation, _) = evaluate(&state, &guard.inputs);

    let profile = &state.database.profile;

    Json(PlayerGetResponse {
        profile: profile.clone(),
        meta: format!("{} · {} · Age {}", profile.position, profile.league, profile.age),
        summary: player_summary_lines(profile, &guard.inputs, &valuation),
    })
}
