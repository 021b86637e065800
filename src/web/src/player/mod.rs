pub mod get;

use crate::TerminalAppData;
use axum::Router;

pub fn player_routes() -> Router<TerminalAppData> {
    Router::new().merge(get::routes::routes())
}
