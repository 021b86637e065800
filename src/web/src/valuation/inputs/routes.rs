use crate::TerminalAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<TerminalAppData> {
    Router::new().route("/api/inputs", post(super::inputs_update_action))
}
