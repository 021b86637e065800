use crate::validation::ValidationReport;
use core::MatchHistory;

pub(crate) const STATIC_HISTORY_JSON: &str = include_str!("../../data/ratings_history.json");

pub struct HistoryLoader;

impl HistoryLoader {
    pub fn load(raw: &str, report: &mut ValidationReport) -> MatchHistory {
        report
            .decode("ratings_history", raw)
            .unwrap_or_else(Self::fallback)
    }

    fn fallback() -> MatchHistory {
        MatchHistory {
            player_id: "LAFC-99".to_string(),
            player_name: "Denis Bouanga".to_string(),
            season: "2026".to_string(),
            league: "MLS".to_string(),
            position: "LW".to_string(),
            matches: vec![],
        }
    }
}
