use crate::application::read_models::AnalysisReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// YamlFormatter adapter, same field names as the JSON output
pub struct YamlFormatter;

impl YamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for YamlFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        serde_yaml_ng::to_string(report).context("Failed to serialize report to YAML")
    }
}
