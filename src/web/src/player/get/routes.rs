use crate::TerminalAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<TerminalAppData> {
    Router::new().route("/api/player", get(super::player_get_action))
}
