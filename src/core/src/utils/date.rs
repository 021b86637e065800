use chrono::NaiveDate;

pub struct DateUtils;

impl DateUtils {
    /// Whole days from `start` to `end`, floored at one day to avoid
    /// division artifacts downstream.
    pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
        (end - start).num_days().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_between() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(DateUtils::days_between(start, end), 30);
    }

    #[test]
    fn test_days_between_floors_at_one() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(DateUtils::days_between(start, end), 1);
        assert_eq!(DateUtils::days_between(start, start), 1);
    }
}
