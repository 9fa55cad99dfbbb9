//! Read models for CQRS-lite pattern
//!
//! The report formatters never see domain types directly; they render the
//! flattened [`AnalysisReport`].

mod analysis_report;
mod analysis_report_builder;

pub use analysis_report::{
    AnalysisReport, DependencySummary, Issue, IssueType, PropertySummary, UnfixableIssue,
};
pub use analysis_report_builder::AnalysisReportBuilder;
