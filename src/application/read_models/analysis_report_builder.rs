//! Builder for constructing AnalysisReport from the use case response

use super::analysis_report::{AnalysisReport, DependencySummary, PropertySummary};
use crate::application::dto::AnalyzeResponse;
use chrono::{DateTime, SecondsFormat, Utc};

pub struct AnalysisReportBuilder;

impl AnalysisReportBuilder {
    /// Builds the report, stamped with the current time
    pub fn build(response: &AnalyzeResponse) -> AnalysisReport {
        Self::build_at(response, Utc::now())
    }

    /// Builds the report with an explicit timestamp
    pub fn build_at(response: &AnalyzeResponse, timestamp: DateTime<Utc>) -> AnalysisReport {
        let analysis = &response.analysis;
        let total = analysis.dependencies.len();
        let using_properties = analysis.dependencies_using_properties();

        AnalysisReport {
            pom_file: response.pom_path.display().to_string(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            dependencies: DependencySummary {
                total,
                direct: total - using_properties,
                using_properties,
            },
            properties: PropertySummary {
                defined: analysis.properties.clone(),
                used_by: analysis.property_used_by(),
            },
            boms: analysis.boms.clone(),
            transitive_dependencies: analysis.transitive_dependencies.clone(),
            patches: response.plan.direct_patches.clone(),
            property_updates: response.plan.property_patches.clone(),
            conflicts: response.plan.conflicts.clone(),
            issues: Vec::new(),
            cannot_fix: Vec::new(),
            warnings: response.warnings.clone(),
        }
    }
}
