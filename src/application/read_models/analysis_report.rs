//! Analysis report read model
//!
//! Field names are the report's wire format (`pom_file`, `property_updates`, ...)
//! for both JSON and YAML. Every collection is always present, possibly empty.

use crate::pom_analysis::domain::{BomInfo, Patch, TransitiveDependency, VersionConflict};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub pom_file: String,
    /// RFC 3339 creation time
    pub timestamp: String,
    pub dependencies: DependencySummary,
    pub properties: PropertySummary,
    pub boms: Vec<BomInfo>,
    pub transitive_dependencies: Vec<TransitiveDependency>,
    /// Recommended direct edits, BOM updates included
    pub patches: Vec<Patch>,
    /// Property name to recommended value
    pub property_updates: BTreeMap<String, String>,
    pub conflicts: Vec<VersionConflict>,
    /// Known problems with current dependency versions
    pub issues: Vec<Issue>,
    /// Problems no version edit can solve
    pub cannot_fix: Vec<UnfixableIssue>,
    pub warnings: Vec<String>,
}

/// Counts over the analysed dependency records, BOM imports included
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DependencySummary {
    pub total: usize,
    /// Records with a literal version
    pub direct: usize,
    pub using_properties: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertySummary {
    /// Every property known to the analysis, discovered ones included
    pub defined: BTreeMap<String, String>,
    /// Property name to the `groupId:artifactId` keys whose version it sets
    pub used_by: BTreeMap<String, Vec<String>>,
}

/// Whether an issue sits on a declared dependency or further down the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Direct,
    Transitive,
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::Direct => write!(f, "direct"),
            IssueType::Transitive => write!(f, "transitive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub dependency: String,
    pub current_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cves: Vec<String>,
    /// Chain from a declared dependency down to `dependency`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfixableIssue {
    pub dependency: String,
    pub reason: String,
    /// What the user has to do by hand
    pub action: String,
}
