use crate::TerminalAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<TerminalAppData> {
    Router::new().route("/api/valuation", get(super::valuation_get_action))
}
