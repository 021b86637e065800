use crate::TerminalAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<TerminalAppData> {
    Router::new().route("/api/ledger", get(super::ledger_get_action))
}
