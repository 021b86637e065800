pub mod events;
pub mod history;
pub mod profile;

pub use events::{MicroEvent, MicroEventLog};
pub use history::{MatchHistory, MatchRecord, SeriesEventMarker, SeriesPoint};
pub use profile::PlayerProfile;
