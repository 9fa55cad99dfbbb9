use crate::application::read_models::AnalysisReport;
use crate::shared::Result;

/// ReportFormatter port for rendering an analysis report
///
/// One implementation per output mode (json, yaml, human).
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &AnalysisReport) -> Result<String>;
}
