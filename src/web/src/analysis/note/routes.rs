use crate::TerminalAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<TerminalAppData> {
    Router::new().route("/api/analysis", post(super::analysis_note_action))
}
