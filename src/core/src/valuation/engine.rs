use crate::config::TerminalConfig;
use crate::player::{MatchHistory, MicroEventLog, PlayerProfile};
use crate::valuation::inputs::ValuationInputs;
use chrono::NaiveDate;
use serde::Serialize;

/// The index never trades below this floor (currency millions).
pub const INDEX_PRICE_FLOOR: f64 = 4.0;

#[derive(Debug, Clone, Serialize)]
pub struct ValuationResult {
    pub index_price: f64,
    pub confidence_score: f64,
    pub form_signal: f64,
    pub league_multiplier: f64,
    pub contract_runway_years: f64,
    pub interval_width: f64,
    pub micro_signal: f64,
}

pub struct ValuationEngine;

impl ValuationEngine {
    /// Full re-derivation of the valuation from its inputs. Pure and
    /// O(matches + events), so it runs on every slider move and every
    /// API request without caching.
    ///
    /// The match history must be loaded and non-empty before this is
    /// called; with no matches the rating average is undefined and the
    /// index collapses to the floor.
    pub fn calculate(
        profile: &PlayerProfile,
        history: &MatchHistory,
        events: &MicroEventLog,
        inputs: &ValuationInputs,
        config: &TerminalConfig,
        now: NaiveDate,
    ) -> ValuationResult {
        let micro_signal = events.micro_signal();
        let form_signal = determine_form_signal(history, micro_signal);
        let league_multiplier = config.league_multiplier(&profile.league);
        let age_factor = determine_age_factor(profile.age);
        let wage_factor = determine_wage_factor(profile);

        let contract_days = profile.contract_days_remaining(now);
        let contract_runway_years = contract_days as f64 / 365.0;
        let contract_factor =
            determine_contract_factor(contract_runway_years, profile.option_year_probability);

        let base_value = (inputs.anchor_value
            + form_signal * 2.2
            + age_factor
            + wage_factor
            + contract_factor)
            * league_multiplier;

        let time_decay = determine_time_decay(contract_days);
        let index_price = (base_value / time_decay).max(INDEX_PRICE_FLOOR);

        let coverage_ratio = history.coverage_ratio();
        let risk_factor = inputs.risk_factor();

        let confidence_score =
            (55.0 + coverage_ratio * 28.0 - (1.0 - risk_factor) * 12.0).clamp(25.0, 100.0);
        let interval_width = 2.0 + (1.0 - coverage_ratio) * 4.0 + (1.0 - risk_factor) * 3.0;

        ValuationResult {
            index_price,
            confidence_score,
            form_signal,
            league_multiplier,
            contract_runway_years,
            interval_width,
            micro_signal,
        }
    }
}

/// Season rating centered on the neutral baseline of 6, with the rolling
/// event signal amplified by a fixed factor of 4.
fn determine_form_signal(history: &MatchHistory, micro_signal: f64) -> f64 {
    (history.average_rating() - 6.0) + micro_signal * 4.0
}

/// Younger players appreciate faster than older players depreciate: 0.6
/// per year under 27 against 0.4 per year over. The asymmetry is part of
/// the model.
fn determine_age_factor(age: u8) -> f64 {
    let age = age as f64;

    if age < 27.0 {
        (27.0 - age) * 0.6
    } else {
        (27.0 - age) * 0.4
    }
}

/// Higher wage drags the index down (cost of acquisition).
fn determine_wage_factor(profile: &PlayerProfile) -> f64 {
    -profile.wage_millions() * 0.35
}

/// Runway contribution is capped at two years so long contracts cannot
/// inflate the index without bound.
fn determine_contract_factor(runway_years: f64, option_year_probability: f64) -> f64 {
    runway_years.min(2.0) * 1.4 + option_year_probability * 1.1
}

/// Shorter remaining contracts decay the index faster. The 30-day floor
/// keeps nearly expired contracts from producing extreme decay.
fn determine_time_decay(contract_days: i64) -> f64 {
    1.0 + 120.0 / contract_days.max(30) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn profile(age: u8, league: &str, contract_days_out: i64) -> PlayerProfile {
        PlayerProfile {
            player_id: "LAFC-99".to_string(),
            name: "Denis Bouanga".to_string(),
            age,
            position: "LW".to_string(),
            league: league.to_string(),
            current_wage_eur: 3_500_000.0,
            contract_end_date: now() + chrono::Duration::days(contract_days_out),
            option_year_probability: 0.65,
        }
    }

    fn history_with(count: usize, rating: f64) -> MatchHistory {
        MatchHistory {
            player_id: "LAFC-99".to_string(),
            player_name: "Denis Bouanga".to_string(),
            season: "2026".to_string(),
            league: "MLS".to_string(),
            position: "LW".to_string(),
            matches: (0..count)
                .map(|i| crate::player::MatchRecord {
                    date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
                        + chrono::Duration::days(i as i64),
                    opponent: format!("Opponent {}", i),
                    minutes: 90,
                    rating,
                    goals: 0,
                    assists: 0,
                })
                .collect(),
        }
    }

    fn no_events() -> MicroEventLog {
        MicroEventLog {
            player_id: "LAFC-99".to_string(),
            events: vec![],
        }
    }

    fn inputs(anchor: f64, risk: f64) -> ValuationInputs {
        ValuationInputs {
            anchor_value: anchor,
            professionalism_risk: risk,
        }
    }

    #[test]
    fn test_worked_example() {
        // age 29 in MLS, €3.5m wage, contract one year out, anchor 25,
        // risk 40, twelve matches at 6.8 and no micro events.
        let profile = profile(29, "MLS", 365);
        let history = history_with(12, 6.8);
        let result = ValuationEngine::calculate(
            &profile,
            &history,
            &no_events(),
            &inputs(25.0, 40.0),
            &TerminalConfig::default(),
            now(),
        );

        assert!((result.form_signal - 0.8).abs() < 1e-9);
        assert_eq!(result.league_multiplier, 0.85);
        assert!((result.contract_runway_years - 1.0).abs() < 1e-9);

        // base = (25 + 0.8*2.2 - 0.8 - 1.225 + (1.4 + 0.715)) * 0.85
        let base_value = (25.0 + 1.76 - 0.8 - 1.225 + 2.115) * 0.85;
        let time_decay = 1.0 + 120.0 / 365.0;
        assert!((result.index_price - base_value / time_decay).abs() < 1e-9);
        assert!(result.index_price >= 4.0);

        // full coverage, risk factor 0.4
        assert!((result.confidence_score - 75.8).abs() < 1e-9);
    }

    #[test]
    fn test_invariant_bounds_hold_at_extremes() {
        let config = TerminalConfig::default();

        // Worst case: expensive veteran, hostile inputs, contract expired.
        let mut veteran = profile(38, "MLS", 1);
        veteran.current_wage_eur = 40_000_000.0;
        let result = ValuationEngine::calculate(
            &veteran,
            &history_with(1, 3.0),
            &no_events(),
            &inputs(5.0, 0.0),
            &config,
            now(),
        );
        assert_eq!(result.index_price, 4.0);
        assert!(result.confidence_score >= 25.0);

        // Best case: prodigy on a long deal in a premium league.
        let prodigy = profile(18, "Premier League", 365 * 5);
        let result = ValuationEngine::calculate(
            &prodigy,
            &history_with(30, 9.5),
            &no_events(),
            &inputs(80.0, 100.0),
            &config,
            now(),
        );
        assert!(result.index_price >= 4.0);
        assert!(result.confidence_score <= 100.0);
    }

    #[test]
    fn test_coverage_saturation_leaves_confidence_flat() {
        let config = TerminalConfig::default();
        let profile = profile(29, "MLS", 365);

        let at_ten = ValuationEngine::calculate(
            &profile,
            &history_with(10, 6.8),
            &no_events(),
            &inputs(25.0, 40.0),
            &config,
            now(),
        );
        let at_thirty = ValuationEngine::calculate(
            &profile,
            &history_with(30, 6.8),
            &no_events(),
            &inputs(25.0, 40.0),
            &config,
            now(),
        );

        assert_eq!(at_ten.confidence_score, at_thirty.confidence_score);
        assert_eq!(at_ten.interval_width, at_thirty.interval_width);
    }

    #[test]
    fn test_age_factor_asymmetry() {
        assert!((determine_age_factor(24) - 1.8).abs() < 1e-9);
        assert!((determine_age_factor(30) - -1.2).abs() < 1e-9);
        assert_eq!(determine_age_factor(27), 0.0);
    }

    #[test]
    fn test_micro_events_feed_form_signal() {
        let config = TerminalConfig::default();
        let profile = profile(29, "MLS", 365);
        let history = history_with(12, 6.8);

        let events = MicroEventLog {
            player_id: "LAFC-99".to_string(),
            events: vec![crate::player::MicroEvent {
                date: now(),
                event_type: "hat_trick".to_string(),
                impact: 0.5,
                notes: String::new(),
            }],
        };

        let result = ValuationEngine::calculate(
            &profile,
            &history,
            &events,
            &inputs(25.0, 40.0),
            &config,
            now(),
        );

        assert!((result.micro_signal - 0.5).abs() < 1e-9);
        assert!((result.form_signal - (0.8 + 0.5 * 4.0)).abs() < 1e-9);
    }

    #[test]
    fn test_time_decay_floor() {
        // 10 days left behaves like 30.
        assert_eq!(determine_time_decay(10), determine_time_decay(30));
        assert!(determine_time_decay(365) < determine_time_decay(30));
    }
}
