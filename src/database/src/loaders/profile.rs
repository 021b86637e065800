use crate::validation::ValidationReport;
use chrono::NaiveDate;
use core::PlayerProfile;

pub(crate) const STATIC_PROFILE_JSON: &str = include_str!("../../data/player_profile.json");

pub struct ProfileLoader;

impl ProfileLoader {
    pub fn load(raw: &str, report: &mut ValidationReport) -> PlayerProfile {
        report
            .decode("player_profile", raw)
            .unwrap_or_else(Self::fallback)
    }

    /// Built-in profile used when the document cannot be decoded, so the
    /// terminal keeps operating with whatever data loaded.
    fn fallback() -> PlayerProfile {
        PlayerProfile {
            player_id: "LAFC-99".to_string(),
            name: "Denis Bouanga".to_string(),
            age: 29,
            position: "LW".to_string(),
            league: "MLS".to_string(),
            current_wage_eur: 3_500_000.0,
            contract_end_date: NaiveDate::from_ymd_opt(2027, 12, 31).unwrap(),
            option_year_probability: 0.65,
        }
    }
}
