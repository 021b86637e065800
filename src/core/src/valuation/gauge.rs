use crate::valuation::engine::ValuationResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DealLabel {
    Undervalued,
    FairlyPriced,
    Overpriced,
}

impl DealLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealLabel::Undervalued => "Undervalued",
            DealLabel::FairlyPriced => "Fairly priced",
            DealLabel::Overpriced => "Overpriced",
        }
    }
}

/// Index price measured against the market anchor, with the gauge
/// geometry the terminal renders.
#[derive(Debug, Clone, Serialize)]
pub struct DealAssessment {
    pub label: DealLabel,
    pub diff: f64,
    pub gauge_width: f64,
    pub description: String,
}

/// Differences inside this band count as fairly priced.
const FAIR_PRICE_BAND: f64 = 3.0;

impl DealAssessment {
    pub fn from_valuation(valuation: &ValuationResult, anchor_value: f64) -> Self {
        let diff = valuation.index_price - anchor_value;

        let ratio = ((valuation.index_price / anchor_value.max(1.0)) / 2.0).clamp(0.0, 1.0);
        let gauge_width = (ratio * 100.0).clamp(10.0, 100.0);

        let label = if diff > FAIR_PRICE_BAND {
            DealLabel::Overpriced
        } else if diff < -FAIR_PRICE_BAND {
            DealLabel::Undervalued
        } else {
            DealLabel::FairlyPriced
        };

        DealAssessment {
            label,
            diff,
            gauge_width,
            description: format!("{} vs market anchor ({:.1}m)", label.as_str(), diff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valuation(index_price: f64) -> ValuationResult {
        ValuationResult {
            index_price,
            confidence_score: 75.0,
            form_signal: 0.0,
            league_multiplier: 1.0,
            contract_runway_years: 1.0,
            interval_width: 3.0,
            micro_signal: 0.0,
        }
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(
            DealAssessment::from_valuation(&valuation(30.0), 25.0).label,
            DealLabel::Overpriced
        );
        assert_eq!(
            DealAssessment::from_valuation(&valuation(20.0), 25.0).label,
            DealLabel::Undervalued
        );
        assert_eq!(
            DealAssessment::from_valuation(&valuation(27.0), 25.0).label,
            DealLabel::FairlyPriced
        );
    }

    #[test]
    fn test_gauge_width_clamps() {
        // Index far below anchor still renders a visible bar.
        let cheap = DealAssessment::from_valuation(&valuation(4.0), 80.0);
        assert_eq!(cheap.gauge_width, 10.0);

        // Index at twice the anchor fills the gauge.
        let rich = DealAssessment::from_valuation(&valuation(60.0), 25.0);
        assert_eq!(rich.gauge_width, 100.0);
    }

    #[test]
    fn test_description_format() {
        let assessment = DealAssessment::from_valuation(&valuation(20.0), 25.0);
        assert_eq!(
            assessment.description,
            "Undervalued vs market anchor (-5.0m)"
        );
    }
}
