use crate::utils::DateUtils;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable player master record, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_id: String,
    pub name: String,
    pub age: u8,
    pub position: String,
    pub league: String,
    pub current_wage_eur: f64,
    pub contract_end_date: NaiveDate,
    pub option_year_probability: f64,
}

impl PlayerProfile {
    pub fn wage_millions(&self) -> f64 {
        self.current_wage_eur / 1_000_000.0
    }

    /// Whole days until the contract expires, floored at one day so
    /// downstream divisions stay sane.
    pub fn contract_days_remaining(&self, now: NaiveDate) -> i64 {
        DateUtils::days_between(now, self.contract_end_date)
    }
}
