use crate::config::TerminalConfig;
use crate::valuation::engine::ValuationResult;
use serde::Serialize;

/// Projected value never drops below this floor (currency millions).
const PROJECTION_FLOOR: f64 = 2.0;

/// Projection confidence never degrades below this floor.
const CONFIDENCE_FLOOR: f64 = 18.0;

#[derive(Debug, Clone, Serialize)]
pub struct ProjectionRow {
    pub label: String,
    pub projected: f64,
    pub confidence: String,
    pub days: i64,
}

/// Uncertainty envelope around a projection row.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionBand {
    pub label: String,
    pub upper: f64,
    pub lower: f64,
}

pub struct ProjectionBuilder;

impl ProjectionBuilder {
    /// One row per configured horizon, in configuration order, with the
    /// contract-end horizon always appended last.
    pub fn build(
        valuation: &ValuationResult,
        contract_days: i64,
        config: &TerminalConfig,
    ) -> Vec<ProjectionRow> {
        let horizons = config
            .projection_horizons
            .iter()
            .map(|horizon| (horizon.label.to_string(), horizon.days))
            .chain(std::iter::once(("Contract end".to_string(), contract_days)));

        horizons
            .map(|(label, days)| {
                let decay = 1.0 + days as f64 / 365.0;
                let projected = (valuation.index_price / decay).max(PROJECTION_FLOOR);
                let confidence =
                    (valuation.confidence_score - days as f64 / 20.0).max(CONFIDENCE_FLOOR);

                ProjectionRow {
                    label,
                    projected,
                    confidence: format!(
                        "{:.0}% ± {:.1}",
                        confidence, valuation.interval_width
                    ),
                    days,
                }
            })
            .collect()
    }

    /// Envelope of ±1.8 interval widths around each row, lower bound
    /// floored at zero.
    pub fn band(rows: &[ProjectionRow], interval_width: f64) -> Vec<ProjectionBand> {
        rows.iter()
            .map(|row| ProjectionBand {
                label: row.label.clone(),
                upper: row.projected + interval_width * 1.8,
                lower: (row.projected - interval_width * 1.8).max(0.0),
            })
            .collect()
    }
}
