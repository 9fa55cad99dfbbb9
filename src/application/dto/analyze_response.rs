use crate::pom_analysis::domain::{AnalysisResult, PatchPlan};
use std::path::PathBuf;

/// AnalyzeResponse - Output of the analyze use case
///
/// Holds the domain results as-is; the report builder turns them into the
/// read model the formatters consume.
#[derive(Debug, Clone)]
pub struct AnalyzeResponse {
    pub pom_path: PathBuf,
    pub analysis: AnalysisResult,
    pub plan: PatchPlan,
    /// Analysis warnings (undefined properties) followed by the plan's warnings
    pub warnings: Vec<String>,
}

impl AnalyzeResponse {
    pub fn new(
        pom_path: PathBuf,
        analysis: AnalysisResult,
        plan: PatchPlan,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            pom_path,
            analysis,
            plan,
            warnings,
        }
    }
}
