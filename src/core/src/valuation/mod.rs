pub mod engine;
pub mod gauge;
pub mod inputs;
pub mod ledger;
pub mod projection;
pub mod summary;

pub use engine::{ValuationEngine, ValuationResult};
pub use gauge::{DealAssessment, DealLabel};
pub use inputs::ValuationInputs;
pub use ledger::{ScenarioImpact, ScenarioLedger};
pub use projection::{ProjectionBand, ProjectionBuilder, ProjectionRow};
pub use summary::{ScenarioSnapshot, ValuationSummary, player_summary_lines};
