use crate::application::read_models::AnalysisReport;
use crate::pom_analysis::domain::{Patch, RecommendedAction, VersionConflict};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// HumanFormatter adapter for reading the report in a terminal
///
/// Plain text, no colors, so the same output works in a report file. Sections
/// without content are left out, except the dependency summary.
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Section renderers
impl HumanFormatter {
    fn render_header(output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        writeln!(output, "POM Analysis: {}", report.pom_file)?;
        writeln!(output, "Generated: {}", report.timestamp)?;
        writeln!(output)
    }

    fn render_dependencies(output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        let summary = &report.dependencies;
        writeln!(output, "Dependencies Summary:")?;
        writeln!(output, "  Total dependencies: {}", summary.total)?;
        writeln!(output, "  Direct versions: {}", summary.direct)?;
        writeln!(output, "  Using properties: {}", summary.using_properties)?;
        writeln!(output)
    }

    fn render_boms(output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        if report.boms.is_empty() {
            return Ok(());
        }
        writeln!(output, "BOM Imports: {}", report.boms.len())?;
        for bom in &report.boms {
            writeln!(
                output,
                "  - {}:{}:{}",
                bom.group_id, bom.artifact_id, bom.version
            )?;
        }
        writeln!(output)
    }

    fn render_properties(output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        let used_by = &report.properties.used_by;
        if used_by.is_empty() {
            return Ok(());
        }
        writeln!(output, "Property Usage:")?;
        for (name, keys) in used_by {
            let value = report
                .properties
                .defined
                .get(name)
                .map(String::as_str)
                .unwrap_or("<undefined>");
            writeln!(output, "  {} = {} (used by {})", name, value, keys.len())?;
            for key in keys {
                writeln!(output, "    - {}", key)?;
            }
        }
        writeln!(output)
    }

    fn render_transitive(output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        if report.transitive_dependencies.is_empty() {
            return Ok(());
        }
        writeln!(output, "Transitive Dependencies:")?;
        for dep in &report.transitive_dependencies {
            writeln!(
                output,
                "  - {}:{}:{} via {}",
                dep.group_id,
                dep.artifact_id,
                dep.version,
                dep.path.join(" -> ")
            )?;
        }
        writeln!(output)
    }

    fn render_conflicts(output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        if report.conflicts.is_empty() {
            return Ok(());
        }
        writeln!(output, "Version Conflicts: {}", report.conflicts.len())?;
        for conflict in &report.conflicts {
            writeln!(output, "  {} -> {}", conflict.group_id, describe_action(conflict))?;
            for (artifact, version) in &conflict.requested_versions {
                writeln!(output, "    {}: {}", artifact, version)?;
            }
        }
        writeln!(output)
    }

    fn render_issues(output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        if report.issues.is_empty() {
            return Ok(());
        }
        writeln!(output, "Issues Found: {}", report.issues.len())?;
        for issue in &report.issues {
            write!(
                output,
                "  - [{}] {} {}",
                issue.issue_type, issue.dependency, issue.current_version
            )?;
            if let Some(required) = &issue.required_version {
                write!(output, " -> {}", required)?;
            }
            if !issue.cves.is_empty() {
                write!(output, " ({})", issue.cves.join(", "))?;
            }
            writeln!(output)?;
            if !issue.path.is_empty() {
                writeln!(output, "    via {}", issue.path.join(" -> "))?;
            }
        }
        writeln!(output)
    }

    fn render_cannot_fix(output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        if report.cannot_fix.is_empty() {
            return Ok(());
        }
        writeln!(output, "Cannot Fix: {}", report.cannot_fix.len())?;
        writeln!(output, "  Manual Intervention Required:")?;
        for unfixable in &report.cannot_fix {
            writeln!(output, "  - {}: {}", unfixable.dependency, unfixable.reason)?;
            writeln!(output, "    Action: {}", unfixable.action)?;
        }
        writeln!(output)
    }

    fn render_patches(output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        if report.patches.is_empty() && report.property_updates.is_empty() {
            writeln!(output, "No patches recommended.")?;
            return writeln!(output);
        }

        if !report.patches.is_empty() {
            writeln!(output, "Recommended Patches: {}", report.patches.len())?;
            for patch in &report.patches {
                writeln!(output, "  - {}", describe_patch(patch))?;
            }
            writeln!(output)?;
        }

        if !report.property_updates.is_empty() {
            writeln!(output, "Property Updates: {}", report.property_updates.len())?;
            for (name, value) in &report.property_updates {
                writeln!(output, "  - {}: {}", name, value)?;
            }
            writeln!(output)?;
        }
        Ok(())
    }

    fn render_warnings(output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        if report.warnings.is_empty() {
            return Ok(());
        }
        writeln!(output, "Warnings:")?;
        for warning in &report.warnings {
            writeln!(output, "  - {}", warning)?;
        }
        Ok(())
    }
}

fn describe_action(conflict: &VersionConflict) -> String {
    match (
        conflict.recommended_action,
        &conflict.bom_candidate,
        &conflict.optimal_version,
    ) {
        (RecommendedAction::UpdateBom, Some(bom), Some(version)) => {
            format!("update_bom ({} to {})", bom.artifact_id, version)
        }
        (action, _, _) => action.to_string(),
    }
}

fn describe_patch(patch: &Patch) -> String {
    let mut text = format!("{}:{} -> {}", patch.group_id, patch.artifact_id, patch.version);
    if let (Some(dep_type), Some(scope)) = (&patch.dep_type, &patch.scope) {
        text.push_str(&format!(" (type={}, scope={})", dep_type, scope));
    }
    text
}

impl ReportFormatter for HumanFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        Self::render_header(&mut output, report)?;
        Self::render_dependencies(&mut output, report)?;
        Self::render_boms(&mut output, report)?;
        Self::render_properties(&mut output, report)?;
        Self::render_transitive(&mut output, report)?;
        Self::render_conflicts(&mut output, report)?;
        Self::render_issues(&mut output, report)?;
        Self::render_cannot_fix(&mut output, report)?;
        Self::render_patches(&mut output, report)?;
        Self::render_warnings(&mut output, report)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{
        DependencySummary, Issue, IssueType, PropertySummary, UnfixableIssue,
    };
    use crate::pom_analysis::domain::BomInfo;
    use std::collections::BTreeMap;

    fn base_report() -> AnalysisReport {
        let mut defined = BTreeMap::new();
        defined.insert("jackson.version".to_string(), "2.15.2".to_string());
        let mut used_by = BTreeMap::new();
        used_by.insert(
            "jackson.version".to_string(),
            vec!["com.fasterxml:jackson-core".to_string()],
        );

        AnalysisReport {
            pom_file: "/test/pom.xml".to_string(),
            timestamp: "2024-01-01T12:00:00Z".to_string(),
            dependencies: DependencySummary {
                total: 5,
                direct: 2,
                using_properties: 3,
            },
            properties: PropertySummary { defined, used_by },
            ..Default::default()
        }
    }

    #[test]
    fn test_format_header_and_summary() {
        let output = HumanFormatter::new().format(&base_report()).unwrap();

        assert!(output.starts_with("POM Analysis: /test/pom.xml"));
        assert!(output.contains("Dependencies Summary:"));
        assert!(output.contains("Total dependencies: 5"));
        assert!(output.contains("jackson.version = 2.15.2 (used by 1)"));
        assert!(output.contains("No patches recommended."));
        assert!(!output.contains("Warnings:"));
        assert!(!output.contains("Issues Found"));
        assert!(!output.contains("Cannot Fix"));
    }

    #[test]
    fn test_format_issues_and_cannot_fix() {
        let report = AnalysisReport {
            issues: vec![
                Issue {
                    issue_type: IssueType::Direct,
                    dependency: "log4j:log4j".to_string(),
                    current_version: "1.2.17".to_string(),
                    required_version: Some("1.2.17.redhat-00001".to_string()),
                    cves: vec!["CVE-2022-23305".to_string()],
                    path: Vec::new(),
                },
                Issue {
                    issue_type: IssueType::Transitive,
                    dependency: "commons-collections".to_string(),
                    current_version: "3.2.1".to_string(),
                    required_version: None,
                    cves: Vec::new(),
                    path: vec![
                        "kafka".to_string(),
                        "zookeeper".to_string(),
                        "commons-collections".to_string(),
                    ],
                },
            ],
            cannot_fix: vec![UnfixableIssue {
                dependency: "shaded-jar".to_string(),
                reason: "Contains shaded vulnerable code".to_string(),
                action: "Upgrade to version 2.0+".to_string(),
            }],
            ..base_report()
        };

        let output = HumanFormatter::new().format(&report).unwrap();

        assert!(output.contains("Issues Found: 2"));
        assert!(output
            .contains("  - [direct] log4j:log4j 1.2.17 -> 1.2.17.redhat-00001 (CVE-2022-23305)"));
        assert!(output.contains("    via kafka -> zookeeper -> commons-collections"));
        assert!(output.contains("Cannot Fix: 1"));
        assert!(output.contains("Manual Intervention Required"));
        assert!(output.contains("  - shaded-jar: Contains shaded vulnerable code"));
        assert!(output.contains("    Action: Upgrade to version 2.0+"));
    }

    #[test]
    fn test_format_warnings() {
        let report = AnalysisReport {
            warnings: vec![
                "Property netty.version is referenced but not found in project".to_string(),
                "BOM spring-boot-dependencies may override patches".to_string(),
            ],
            ..base_report()
        };

        let output = HumanFormatter::new().format(&report).unwrap();

        assert!(output.contains("Warnings:"));
        assert!(output.contains("Property netty.version"));
        assert!(output.contains("BOM spring-boot-dependencies"));
    }

    #[test]
    fn test_format_bom_update() {
        let mut requested_versions = BTreeMap::new();
        requested_versions.insert("netty-handler".to_string(), "4.1.100.Final".to_string());
        requested_versions.insert("netty-codec".to_string(), "4.1.118.Final".to_string());

        let report = AnalysisReport {
            boms: vec![BomInfo::new("io.netty", "netty-bom", "4.1.94.Final")],
            conflicts: vec![VersionConflict {
                group_id: "io.netty".to_string(),
                requested_versions,
                recommended_action: RecommendedAction::UpdateBom,
                bom_candidate: Some(BomInfo::new("io.netty", "netty-bom", "4.1.94.Final")),
                optimal_version: Some("4.1.118.Final".to_string()),
            }],
            patches: vec![Patch::bom_import("io.netty", "netty-bom", "4.1.118.Final")],
            ..base_report()
        };

        let output = HumanFormatter::new().format(&report).unwrap();

        assert!(output.contains("BOM Imports: 1"));
        assert!(output.contains("io.netty -> update_bom (netty-bom to 4.1.118.Final)"));
        assert!(output
            .contains("io.netty:netty-bom -> 4.1.118.Final (type=pom, scope=import)"));
    }

    #[test]
    fn test_format_undefined_property() {
        let mut report = base_report();
        report
            .properties
            .used_by
            .insert("missing.version".to_string(), vec!["a:b".to_string()]);

        let output = HumanFormatter::new().format(&report).unwrap();
        assert!(output.contains("missing.version = <undefined> (used by 1)"));
    }

    #[test]
    fn test_format_property_updates() {
        let mut property_updates = BTreeMap::new();
        property_updates.insert("shared.version".to_string(), "2.0.0".to_string());
        let report = AnalysisReport {
            property_updates,
            ..base_report()
        };

        let output = HumanFormatter::new().format(&report).unwrap();
        assert!(output.contains("Property Updates: 1"));
        assert!(output.contains("  - shared.version: 2.0.0"));
    }
}
