use std::ops::RangeInclusive;

/// A forward time window a projection is computed over.
#[derive(Debug, Clone)]
pub struct Horizon {
    pub label: &'static str,
    pub days: i64,
}

/// Tunable model parameters. Everything the terminal can be re-anchored
/// with lives here so the numbers stay in one place.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    pub default_anchor_value: f64,
    pub default_professionalism_risk: f64,
    pub anchor_range: RangeInclusive<f64>,
    pub league_multipliers: Vec<(&'static str, f64)>,
    pub projection_horizons: Vec<Horizon>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            default_anchor_value: 25.0,
            default_professionalism_risk: 40.0,
            anchor_range: 5.0..=80.0,
            league_multipliers: vec![
                ("MLS", 0.85),
                ("Premier League", 1.35),
                ("LaLiga", 1.25),
                ("Bundesliga", 1.2),
                ("SerieA", 1.15),
            ],
            projection_horizons: vec![
                Horizon { label: "30d", days: 30 },
                Horizon { label: "90d", days: 90 },
                Horizon { label: "End of season", days: 210 },
            ],
        }
    }
}

impl TerminalConfig {
    /// Leagues outside the table trade at parity.
    pub fn league_multiplier(&self, league: &str) -> f64 {
        self.league_multipliers
            .iter()
            .find(|(name, _)| *name == league)
            .map(|(_, multiplier)| *multiplier)
            .unwrap_or(1.0)
    }

    pub fn clamp_anchor_value(&self, value: f64) -> f64 {
        value.clamp(*self.anchor_range.start(), *self.anchor_range.end())
    }
}
