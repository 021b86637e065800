use crate::valuation::inputs::ValuationInputs;
use serde::{Deserialize, Serialize};

/// Anchor value can never be pushed below this by a scenario.
const SCENARIO_ANCHOR_FLOOR: f64 = 5.0;

/// Structured impact returned by the scenario collaborator. Only the
/// value delta is mandatory; everything else defaults to neutral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioImpact {
    pub delta_value_eur_m: f64,
    #[serde(default)]
    pub delta_confidence_points: f64,
    #[serde(default)]
    pub ledger_entry_text: String,
    #[serde(default)]
    pub rationale: String,
}

/// Append-only record of applied scenario impacts.
#[derive(Debug, Default)]
pub struct ScenarioLedger {
    entries: Vec<ScenarioImpact>,
}

impl ScenarioLedger {
    /// Only this many entries are surfaced to the terminal.
    pub const DISPLAY_LIMIT: usize = 4;

    pub fn new() -> Self {
        ScenarioLedger::default()
    }

    /// Folds an impact into the user inputs and records it. The anchor
    /// floor and the risk clamp are applied here so no caller can skip
    /// them.
    pub fn apply(&mut self, inputs: &mut ValuationInputs, impact: ScenarioImpact) {
        inputs.anchor_value = (inputs.anchor_value + impact.delta_value_eur_m).max(SCENARIO_ANCHOR_FLOOR);
        inputs.professionalism_risk =
            (inputs.professionalism_risk + impact.delta_confidence_points).clamp(0.0, 100.0);

        self.entries.push(impact);
    }

    /// The most recent entries, oldest first.
    pub fn recent(&self) -> &[ScenarioImpact] {
        let start = self.entries.len().saturating_sub(Self::DISPLAY_LIMIT);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(anchor: f64, risk: f64) -> ValuationInputs {
        ValuationInputs {
            anchor_value: anchor,
            professionalism_risk: risk,
        }
    }

    fn impact(delta_value: f64, delta_confidence: f64) -> ScenarioImpact {
        ScenarioImpact {
            delta_value_eur_m: delta_value,
            delta_confidence_points: delta_confidence,
            ledger_entry_text: "entry".to_string(),
            rationale: "rationale".to_string(),
        }
    }

    #[test]
    fn test_anchor_floor_survives_large_negative_delta() {
        let mut ledger = ScenarioLedger::new();
        let mut inputs = inputs(5.0, 40.0);

        ledger.apply(&mut inputs, impact(-1000.0, 0.0));

        assert_eq!(inputs.anchor_value, 5.0);
    }

    #[test]
    fn test_risk_clamps_both_directions() {
        let mut ledger = ScenarioLedger::new();

        let mut low = inputs(25.0, 5.0);
        ledger.apply(&mut low, impact(0.0, -50.0));
        assert_eq!(low.professionalism_risk, 0.0);

        let mut high = inputs(25.0, 95.0);
        ledger.apply(&mut high, impact(0.0, 50.0));
        assert_eq!(high.professionalism_risk, 100.0);
    }

    #[test]
    fn test_recent_caps_at_display_limit() {
        let mut ledger = ScenarioLedger::new();
        let mut state = inputs(25.0, 40.0);

        for i in 0..6 {
            ledger.apply(&mut state, impact(i as f64, 0.0));
        }

        let recent = ledger.recent();
        assert_eq!(recent.len(), ScenarioLedger::DISPLAY_LIMIT);
        assert_eq!(recent[0].delta_value_eur_m, 2.0);
        assert_eq!(recent[3].delta_value_eur_m, 5.0);
        assert_eq!(ledger.len(), 6);
    }

    #[test]
    fn test_missing_delta_value_is_rejected_at_decode() {
        let raw = r#"{"delta_confidence_points": 3.0, "rationale": "no value delta"}"#;
        assert!(serde_json::from_str::<ScenarioImpact>(raw).is_err());

        let raw = r#"{"delta_value_eur_m": -2.5}"#;
        let decoded: ScenarioImpact = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.delta_value_eur_m, -2.5);
        assert_eq!(decoded.delta_confidence_points, 0.0);
        assert!(decoded.ledger_entry_text.is_empty());
    }
}
