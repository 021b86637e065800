use crate::config::TerminalConfig;
use serde::Serialize;

/// The two user-controlled dials. Every setter clamps, so the rest of
/// the model never sees an out-of-range value.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationInputs {
    pub anchor_value: f64,
    pub professionalism_risk: f64,
}

impl ValuationInputs {
    pub fn from_config(config: &TerminalConfig) -> Self {
        ValuationInputs {
            anchor_value: config.default_anchor_value,
            professionalism_risk: config.default_professionalism_risk,
        }
    }

    pub fn set_anchor_value(&mut self, value: f64, config: &TerminalConfig) {
        self.anchor_value = config.clamp_anchor_value(value);
    }

    pub fn set_professionalism_risk(&mut self, value: f64) {
        self.professionalism_risk = value.clamp(0.0, 100.0);
    }

    pub fn risk_factor(&self) -> f64 {
        self.professionalism_risk / 100.0
    }
}
