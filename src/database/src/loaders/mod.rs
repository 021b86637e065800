mod events;
mod history;
mod profile;

use crate::DatabaseEntity;
use crate::validation::ValidationReport;
use log::debug;
use std::borrow::Cow;
use std::path::Path;
use std::{env, fs};

pub use events::EventsLoader;
pub use history::HistoryLoader;
pub use profile::ProfileLoader;

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> DatabaseEntity {
        let mut report = ValidationReport::default();

        let profile_raw = read_document("player_profile.json", profile::STATIC_PROFILE_JSON);
        let history_raw = read_document("ratings_history.json", history::STATIC_HISTORY_JSON);
        let events_raw = read_document("micro_events.json", events::STATIC_EVENTS_JSON);

        let profile = ProfileLoader::load(&profile_raw, &mut report);
        let history = HistoryLoader::load(&history_raw, &mut report);
        let events = EventsLoader::load(&events_raw, &mut report);

        debug!(
            "loaded {}: {} matches, {} micro events",
            profile.player_id,
            history.matches.len(),
            events.events.len()
        );

        DatabaseEntity {
            profile,
            history,
            events,
            validation: report,
        }
    }
}

/// Embedded documents can be overridden by pointing `DATA_DIR` at a
/// directory on disk. An unreadable override is a fatal startup
/// condition, unlike a schema problem inside a document.
fn read_document(name: &str, embedded: &'static str) -> Cow<'static, str> {
    match env::var("DATA_DIR") {
        Ok(dir) => {
            let path = Path::new(&dir).join(name);
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|err| panic!("cannot read {}: {}", path.display(), err));
            Cow::Owned(content)
        }
        Err(_) => Cow::Borrowed(embedded),
    }
}
