pub mod config;
pub mod player;
pub mod valuation;

pub mod utils;

pub use config::{Horizon, TerminalConfig};

pub use player::{
    MatchHistory, MatchRecord, MicroEvent, MicroEventLog, PlayerProfile, SeriesEventMarker,
    SeriesPoint,
};

pub use valuation::{
    DealAssessment, DealLabel, ProjectionBand, ProjectionBuilder, ProjectionRow, ScenarioImpact,
    ScenarioLedger, ScenarioSnapshot, ValuationEngine, ValuationInputs, ValuationResult,
    ValuationSummary, player_summary_lines,
};

pub use utils::*;
