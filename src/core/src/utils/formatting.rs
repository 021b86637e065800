pub struct FormattingUtils;

impl FormattingUtils {
    /// Terminal-wide currency rendering, e.g. `€23.4m`.
    pub fn currency_millions(value: f64) -> String {
        format!("€{:.1}m", value)
    }
}
