use crate::application::read_models::AnalysisReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter: pretty-printed JSON with a trailing newline
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

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")?;
        json.push('\n');
        Ok(json)
    }
}
