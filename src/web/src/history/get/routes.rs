use crate::TerminalAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<TerminalAppData> {
    Router::new().route("/api/history", get(super::history_get_action))
}
