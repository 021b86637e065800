use crate::TerminalAppData;
use crate::analysis::analysis_routes;
use crate::common::default_handler::default_handler;
use crate::history::history_routes;
use crate::ledger::ledger_routes;
use crate::player::player_routes;
use crate::status::status_routes;
use crate::valuation::valuation_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<TerminalAppData> {
        Router::<TerminalAppData>::new()
            .merge(player_routes())
            .merge(valuation_routes())
            .merge(history_routes())
            .merge(ledger_routes())
            .merge(analysis_routes())
            .merge(status_routes())
            .fallback(default_handler)
    }
}
