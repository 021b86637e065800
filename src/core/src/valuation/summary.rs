use crate::player::PlayerProfile;
use crate::utils::FormattingUtils;
use crate::valuation::engine::ValuationResult;
use crate::valuation::gauge::DealAssessment;
use crate::valuation::inputs::ValuationInputs;
use serde::Serialize;

/// Snapshot handed to the analyst-note prompt. Figures are pre-rounded
/// to what the terminal shows, so the note talks about the same numbers
/// the user sees.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationSummary {
    pub player: PlayerProfile,
    pub valuation: SummaryFigures,
    pub form_signal: String,
    pub contract_runway_years: String,
    pub micro_signal: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryFigures {
    pub index_price_eur_m: String,
    pub confidence_score: String,
    pub deal_label: String,
}

impl ValuationSummary {
    pub fn build(
        profile: &PlayerProfile,
        valuation: &ValuationResult,
        deal: &DealAssessment,
    ) -> Self {
        ValuationSummary {
            player: profile.clone(),
            valuation: SummaryFigures {
                index_price_eur_m: format!("{:.1}", valuation.index_price),
                confidence_score: format!("{:.0}", valuation.confidence_score),
                deal_label: deal.description.clone(),
            },
            form_signal: format!("{:.2}", valuation.form_signal),
            contract_runway_years: format!("{:.2}", valuation.contract_runway_years),
            micro_signal: format!("{:.2}", valuation.micro_signal),
        }
    }
}

/// Raw snapshot for the scenario prompt; the model gets unrounded
/// numbers here because it computes deltas against them.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSnapshot {
    pub player: PlayerProfile,
    pub index_price_eur_m: f64,
    pub confidence_score: f64,
}

impl ScenarioSnapshot {
    pub fn build(profile: &PlayerProfile, valuation: &ValuationResult) -> Self {
        ScenarioSnapshot {
            player: profile.clone(),
            index_price_eur_m: valuation.index_price,
            confidence_score: valuation.confidence_score,
        }
    }
}

/// Headline lines for the player panel.
pub fn player_summary_lines(
    profile: &PlayerProfile,
    inputs: &ValuationInputs,
    valuation: &ValuationResult,
) -> Vec<String> {
    vec![
        format!("Market anchor: {}", FormattingUtils::currency_millions(inputs.anchor_value)),
        format!("Current wage: €{:.2}m / year", profile.wage_millions()),
        format!("Contract end: {}", profile.contract_end_date),
        format!(
            "Option year probability: {:.0}%",
            profile.option_year_probability * 100.0
        ),
        format!("Rolling micro signal: {:.2}", valuation.micro_signal),
    ]
}
