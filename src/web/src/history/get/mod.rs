pub mod routes;

use crate::TerminalAppData;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use fcd_core::{MatchRecord, MicroEvent, SeriesEventMarker, SeriesPoint};
use serde::Serialize;

#[derive(Serialize)]
pub struct HistoryGetResponse {
    pub season: String,
    pub matches: Vec<MatchRecord>,
    pub events: Vec<MicroEvent>,
    pub series: Vec<SeriesPoint>,
    pub markers: Vec<SeriesEventMarker>,
}

pub async fn history_get_action(State(state): State<TerminalAppData>) -> impl IntoResponse {
    let guard = state.state.read().await;
    let anchor_value = guard.inputs.anchor_value;
    drop(guard);

    let history = &state.database.history;
    let events = &state.database.events;

    Json(HistoryGetResponse {
        season: history.season.clone(),
        matches: history.matches.clone(),
        events: events.events.clone(),
        series: history.index_series(anchor_value),
        markers: history.event_markers(events, anchor_value),
    })
}
