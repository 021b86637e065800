use crate::TerminalAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<TerminalAppData> {
    Router::new().route("/api/status", get(super::status_get_action))
}
