use crate::player::events::MicroEventLog;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub opponent: String,
    pub minutes: u16,
    pub rating: f64,
    pub goals: u8,
    pub assists: u8,
}

/// One season of match-by-match ratings for a single player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchHistory {
    pub player_id: String,
    pub player_name: String,
    pub season: String,
    pub league: String,
    pub position: String,
    pub matches: Vec<MatchRecord>,
}

/// A dated point on the rating-derived index line.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A micro-event pinned onto the index line for display.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesEventMarker {
    pub date: NaiveDate,
    pub event_type: String,
    pub value: f64,
}

/// Matches needed before coverage stops adding confidence.
const COVERAGE_SATURATION: f64 = 10.0;

impl MatchHistory {
    /// Mean performance rating across the season. Callers load a
    /// non-empty history before valuation runs.
    pub fn average_rating(&self) -> f64 {
        let total: f64 = self.matches.iter().map(|record| record.rating).sum();
        total / self.matches.len() as f64
    }

    /// Fraction of the saturation window covered by played matches,
    /// capped at 1.
    pub fn coverage_ratio(&self) -> f64 {
        (self.matches.len() as f64 / COVERAGE_SATURATION).min(1.0)
    }

    /// Per-match index line: the anchor lifted by how far each rating
    /// sits from the neutral baseline, floored at the index floor.
    pub fn index_series(&self, anchor_value: f64) -> Vec<SeriesPoint> {
        self.matches
            .iter()
            .map(|record| SeriesPoint {
                date: record.date,
                value: (anchor_value + (record.rating - 6.0) * 2.4).max(4.0),
            })
            .collect()
    }

    /// Pins each micro-event to the index point of the match played the
    /// same day; events between matches sit on the anchor line.
    pub fn event_markers(
        &self,
        events: &MicroEventLog,
        anchor_value: f64,
    ) -> Vec<SeriesEventMarker> {
        let series = self.index_series(anchor_value);

        events
            .events
            .iter()
            .map(|event| {
                let value = series
                    .iter()
                    .find(|point| point.date == event.date)
                    .map(|point| point.value)
                    .unwrap_or(anchor_value);

                SeriesEventMarker {
                    date: event.date,
                    event_type: event.event_type.clone(),
                    value,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::events::MicroEvent;

    fn record(day: u32, rating: f64) -> MatchRecord {
        MatchRecord {
            date: NaiveDate::from_ymd_opt(2026, 4, day).unwrap(),
            opponent: "Opponent".to_string(),
            minutes: 90,
            rating,
            goals: 0,
            assists: 0,
        }
    }

    fn history(matches: Vec<MatchRecord>) -> MatchHistory {
        MatchHistory {
            player_id: "LAFC-99".to_string(),
            player_name: "Denis Bouanga".to_string(),
            season: "2026".to_string(),
            league: "MLS".to_string(),
            position: "LW".to_string(),
            matches,
        }
    }

    #[test]
    fn test_average_rating() {
        let h = history(vec![record(1, 6.0), record(2, 7.0), record(3, 8.0)]);
        assert!((h.average_rating() - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_coverage_saturates_at_ten_matches() {
        let h = history((1..=4).map(|d| record(d, 6.5)).collect());
        assert_eq!(h.coverage_ratio(), 0.4);

        let h = history((1..=10).map(|d| record(d, 6.5)).collect());
        assert_eq!(h.coverage_ratio(), 1.0);

        let h = history((1..=25).map(|d| record(d, 6.5)).collect());
        assert_eq!(h.coverage_ratio(), 1.0);
    }

    #[test]
    fn test_index_series_floors_at_four() {
        let h = history(vec![record(1, 1.0)]);
        let series = h.index_series(5.0);
        // 5 + (1 - 6) * 2.4 = -7, floored
        assert_eq!(series[0].value, 4.0);
    }

    #[test]
    fn test_event_markers_snap_to_match_days() {
        let h = history(vec![record(10, 8.0)]);
        let events = MicroEventLog {
            player_id: "LAFC-99".to_string(),
            events: vec![
                MicroEvent {
                    date: NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
                    event_type: "brace".to_string(),
                    impact: 0.5,
                    notes: String::new(),
                },
                MicroEvent {
                    date: NaiveDate::from_ymd_opt(2026, 4, 11).unwrap(),
                    event_type: "training_flag".to_string(),
                    impact: -0.2,
                    notes: String::new(),
                },
            ],
        };

        let markers = h.event_markers(&events, 25.0);
        assert_eq!(markers[0].value, 25.0 + 2.0 * 2.4);
        assert_eq!(markers[1].value, 25.0);
    }
}
