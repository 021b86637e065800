use crate::TerminalAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<TerminalAppData> {
    Router::new().route("/api/scenario", post(super::analysis_scenario_action))
}
