use serde::de::DeserializeOwned;

/// Path-qualified warnings collected while decoding the data documents.
/// Decoding failures are non-fatal: the loader falls back and the
/// terminal surfaces the warnings as a banner.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Decodes a document into its typed model. On failure the error is
    /// recorded as `document.path.to.field: description` and `None` is
    /// returned so the caller can substitute its fallback.
    pub(crate) fn decode<T: DeserializeOwned>(&mut self, document: &str, raw: &str) -> Option<T> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);

        match serde_path_to_error::deserialize(&mut deserializer) {
            Ok(value) => Some(value),
            Err(err) => {
                let path = err.path().to_string();
                let message = if path == "." {
                    format!("{}: {}", document, err.inner())
                } else {
                    format!("{}.{}: {}", document, path, err.inner())
                };

                self.warnings.push(message);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::MicroEventLog;

    #[test]
    fn test_decode_failure_is_path_qualified() {
        let mut report = ValidationReport::default();

        let raw = r#"{"player_id": "LAFC-99", "events": [{"date": "2026-05-01", "type": "x", "impact": "not a number", "notes": ""}]}"#;
        let decoded: Option<MicroEventLog> = report.decode("micro_events", raw);

        assert!(decoded.is_none());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("micro_events.events[0].impact:"));
    }

    #[test]
    fn test_clean_decode_leaves_no_warnings() {
        let mut report = ValidationReport::default();

        let raw = r#"{"player_id": "LAFC-99", "events": []}"#;
        let decoded: Option<MicroEventLog> = report.decode("micro_events", raw);

        assert!(decoded.is_some());
        assert!(report.is_clean());
    }
}
