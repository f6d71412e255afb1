use crate::application::read_models::MatchReport;
use crate::ports::outbound::MatchFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter emitting the reports as a pretty-printed JSON array
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchFormatter for JsonFormatter {
    fn format(&self, reports: &[MatchReport]) -> Result<String> {
        serde_json::to_string_pretty(reports).context("Failed to serialize match report to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::sample_report;

    #[test]
    fn test_format_is_valid_json() {
        let output = JsonFormatter::new().format(&[sample_report(true)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let report = &value[0];
        assert_eq!(report["metadata"]["file"], "src/CustomButton.tsx");
        assert_eq!(report["components"][0]["name"], "CustomButton");
        assert_eq!(report["matches"][0]["catalogName"], "Button");
        assert_eq!(report["matches"][0]["confidence"], "high");
        assert_eq!(report["matches"][0]["scores"]["semantic"], 0);
    }

    #[test]
    fn test_format_empty_run() {
        let output = JsonFormatter::new().format(&[]).unwrap();
        assert_eq!(output, "[]");
    }
}
