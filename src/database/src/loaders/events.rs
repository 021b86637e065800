use crate::validation::ValidationReport;
use core::MicroEventLog;

pub(crate) const STATIC_EVENTS_JSON: &str = include_str!("../../data/micro_events.json");

pub struct EventsLoader;

impl EventsLoader {
    pub fn load(raw: &str, report: &mut ValidationReport) -> MicroEventLog {
        report
            .decode("micro_events", raw)
            .unwrap_or_else(Self::fallback)
    }

    fn fallback() -> MicroEventLog {
        MicroEventLog {
            player_id: "LAFC-99".to_string(),
            events: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_events_decode() {
        let mut report = ValidationReport::default();
        let events = EventsLoader::load(STATIC_EVENTS_JSON, &mut report);

        assert!(report.is_clean());
        assert!(!events.events.is_empty());
        // Chronological order is what the rolling window relies on.
        assert!(events.events.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }

    #[test]
    fn test_broken_events_fall_back_empty() {
        let mut report = ValidationReport::default();
        let events = EventsLoader::load("[]", &mut report);

        assert!(events.events.is_empty());
        assert_eq!(report.warnings.len(), 1);
    }
}
