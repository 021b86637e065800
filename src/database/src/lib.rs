mod loaders;
mod validation;

pub use loaders::DatabaseLoader;
pub use validation::ValidationReport;

use core::{MatchHistory, MicroEventLog, PlayerProfile};

/// Everything the terminal knows at startup: the three data documents
/// plus whatever the loaders had to say about them.
pub struct DatabaseEntity {
    pub profile: PlayerProfile,
    pub history: MatchHistory,
    pub events: MicroEventLog,
    pub validation: ValidationReport,
}
