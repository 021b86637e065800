use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A small discrete occurrence (on-pitch or off-pitch) with a signed
/// impact used to adjust the short-term signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicroEvent {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub event_type: String,
    pub impact: f64,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicroEventLog {
    pub player_id: String,
    pub events: Vec<MicroEvent>,
}

/// How many trailing events feed the rolling signal.
const MICRO_SIGNAL_WINDOW: usize = 5;

impl MicroEventLog {
    /// Average impact over the most recent window of events, 0 when the
    /// log is empty. Events are kept in chronological order.
    pub fn micro_signal(&self) -> f64 {
        if self.events.is_empty() {
            return 0.0;
        }

        let window_start = self.events.len().saturating_sub(MICRO_SIGNAL_WINDOW);
        let recent = &self.events[window_start..];
        let impact_sum: f64 = recent.iter().map(|event| event.impact).sum();

        impact_sum / recent.len() as f64
    }
}
