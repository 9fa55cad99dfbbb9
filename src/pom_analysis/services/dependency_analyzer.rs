use super::bom_detector::BomDetector;
use super::property_resolver::extract_property_name;
use crate::pom_analysis::domain::{AnalysisResult, DependencyInfo, Manifest, ManifestDependency};
use crate::shared::error::PomBumpError;
use crate::shared::Result;
use std::collections::HashSet;

/// Knobs for [`DependencyAnalyzer::analyze_with_options`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Record `<dependencyManagement>` entries (BOM imports included) as dependencies.
    /// BOM imports are detected either way.
    pub include_dependency_management: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            include_dependency_management: true,
        }
    }
}

/// DependencyAnalyzer service for building the semantic model of a manifest
///
/// Pure business logic over the parsed manifest; no I/O.
///
/// Precedence between the two declaration sections:
/// - `<dependencies>` are recorded first; within a section the last declaration of a
///   key wins.
/// - A `<dependencyManagement>` entry never replaces a `<dependencies>` record that
///   declares its own version. A versionless declaration inherits the managed
///   version, so the managed entry replaces it.
/// - BOM imports are recorded like any other managed entry, so a BOM versioned
///   through a property counts toward that property, and are also listed in
///   [`AnalysisResult::boms`].
pub struct DependencyAnalyzer;

impl DependencyAnalyzer {
    /// Analyzes a manifest with default options
    ///
    /// # Errors
    /// Returns [`PomBumpError::ProjectIsNil`] when `project` is `None`
    pub fn analyze(project: Option<&Manifest>) -> Result<AnalysisResult> {
        Self::analyze_with_options(project, AnalyzeOptions::default())
    }

    /// Analyzes a manifest
    ///
    /// # Arguments
    /// * `project` - The parsed manifest; `None` is a caller error
    /// * `options` - Which sections to record
    ///
    /// # Returns
    /// A fully populated (possibly empty) AnalysisResult
    pub fn analyze_with_options(
        project: Option<&Manifest>,
        options: AnalyzeOptions,
    ) -> Result<AnalysisResult> {
        let project = project.ok_or(PomBumpError::ProjectIsNil)?;

        let mut result = AnalysisResult::new();
        result.properties = project.properties.clone();

        let mut declared_with_version = HashSet::new();
        for dep in &project.dependencies {
            Self::analyze_dependency(dep, &mut result);
            if dep.version.is_empty() {
                declared_with_version.remove(&dep.key());
            } else {
                declared_with_version.insert(dep.key());
            }
        }

        if options.include_dependency_management {
            for dep in &project.dependency_management {
                if declared_with_version.contains(&dep.key()) {
                    tracing::debug!(
                        key = %dep.key(),
                        "managed entry shadowed by a versioned <dependencies> declaration"
                    );
                    continue;
                }
                Self::analyze_dependency(dep, &mut result);
            }
        }

        result.boms = BomDetector::detect(&project.dependency_management);

        tracing::debug!(
            dependencies = result.dependencies.len(),
            properties = result.properties.len(),
            boms = result.boms.len(),
            "manifest analyzed"
        );

        Ok(result)
    }

    /// Records one declaration in `result`, replacing any record with the same key
    pub fn analyze_dependency(dep: &ManifestDependency, result: &mut AnalysisResult) {
        let property_name = extract_property_name(&dep.version);

        if let Some(name) = property_name {
            tracing::debug!(key = %dep.key(), property = name, "version bound to property");
        }

        result.record_dependency(DependencyInfo {
            group_id: dep.group_id.clone(),
            artifact_id: dep.artifact_id.clone(),
            version: dep.version.clone(),
            uses_property: property_name.is_some(),
            property_name: property_name.unwrap_or_default().to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn analyze_single(version: &str) -> DependencyInfo {
        let mut result = AnalysisResult::new();
        DependencyAnalyzer::analyze_dependency(
            &ManifestDependency::new("test", "test", version),
            &mut result,
        );
        result.dependencies.remove("test:test").unwrap()
    }

    #[test]
    fn test_analyze_nil_project() {
        let result = DependencyAnalyzer::analyze(None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("project is nil"));
    }

    #[test]
    fn test_analyze_empty_project() {
        let result = DependencyAnalyzer::analyze(Some(&Manifest::default())).unwrap();
        assert!(result.dependencies.is_empty());
        assert!(result.properties.is_empty());
        assert!(result.property_usage_counts.is_empty());
        assert!(result.boms.is_empty());
        assert!(result.transitive_dependencies.is_empty());
    }

    #[test]
    fn test_analyze_dependency_property_with_spaces() {
        let dep = analyze_single("${ prop.with.spaces }");
        assert!(dep.uses_property);
        assert_eq!(dep.property_name, " prop.with.spaces ");
    }

    #[test]
    fn test_analyze_dependency_nested_property_syntax() {
        let dep = analyze_single("${${nested}}");
        assert!(dep.uses_property);
        assert_eq!(dep.property_name, "${nested}");
    }

    #[test]
    fn test_analyze_dependency_partial_reference() {
        let dep = analyze_single("1.0-${suffix}");
        assert!(!dep.uses_property);
        assert!(dep.property_name.is_empty());
    }

    #[test]
    fn test_analyze_dependency_empty_version() {
        let dep = analyze_single("");
        assert!(!dep.uses_property);
    }

    #[test]
    fn test_analyze_malformed_property_reference() {
        let project = Manifest {
            dependencies: vec![ManifestDependency::new("test", "test", "${incomplete")],
            ..Default::default()
        };
        let result = DependencyAnalyzer::analyze(Some(&project)).unwrap();
        assert!(!result.dependencies["test:test"].uses_property);
        assert!(result.property_usage_counts.is_empty());
    }

    #[test]
    fn test_analyze_circular_property_reference() {
        let mut properties = BTreeMap::new();
        properties.insert("prop1".to_string(), "${prop2}".to_string());
        properties.insert("prop2".to_string(), "${prop1}".to_string());
        let project = Manifest {
            properties,
            dependencies: vec![ManifestDependency::new("test", "test", "${prop1}")],
            ..Default::default()
        };

        let result = DependencyAnalyzer::analyze(Some(&project)).unwrap();
        assert_eq!(result.dependencies["test:test"].property_name, "prop1");
        assert_eq!(result.property_usage_counts["prop1"], 1);
    }

    #[test]
    fn test_analyze_counts_shared_property() {
        let project = Manifest {
            dependencies: vec![
                ManifestDependency::new("com.example", "lib1", "${shared.version}"),
                ManifestDependency::new("com.example", "lib2", "${shared.version}"),
                ManifestDependency::new("org.slf4j", "slf4j-api", "1.7.30"),
            ],
            ..Default::default()
        };

        let result = DependencyAnalyzer::analyze(Some(&project)).unwrap();
        assert_eq!(result.dependencies.len(), 3);
        assert_eq!(result.property_usage_counts.len(), 1);
        assert_eq!(result.property_usage_counts["shared.version"], 2);
    }

    #[test]
    fn test_analyze_duplicate_dependency_last_wins() {
        let project = Manifest {
            dependencies: vec![
                ManifestDependency::new("a", "a", "${a.version}"),
                ManifestDependency::new("a", "a", "2.0"),
            ],
            ..Default::default()
        };

        let result = DependencyAnalyzer::analyze(Some(&project)).unwrap();
        assert_eq!(result.dependencies["a:a"].version, "2.0");
        assert!(result.property_usage_counts.is_empty());
    }

    #[test]
    fn test_managed_entry_does_not_override_versioned_dependency() {
        let project = Manifest {
            dependencies: vec![ManifestDependency::new("io.netty", "netty-handler", "4.1.94.Final")],
            dependency_management: vec![ManifestDependency::new(
                "io.netty",
                "netty-handler",
                "${netty.version}",
            )],
            ..Default::default()
        };

        let result = DependencyAnalyzer::analyze(Some(&project)).unwrap();
        let dep = &result.dependencies["io.netty:netty-handler"];
        assert_eq!(dep.version, "4.1.94.Final");
        assert!(!dep.uses_property);
        assert!(result.property_usage_counts.is_empty());
    }

    #[test]
    fn test_managed_entry_fills_versionless_dependency() {
        let project = Manifest {
            dependencies: vec![ManifestDependency::new("io.netty", "netty-handler", "")],
            dependency_management: vec![ManifestDependency::new(
                "io.netty",
                "netty-handler",
                "${netty.version}",
            )],
            ..Default::default()
        };

        let result = DependencyAnalyzer::analyze(Some(&project)).unwrap();
        let dep = &result.dependencies["io.netty:netty-handler"];
        assert!(dep.uses_property);
        assert_eq!(dep.property_name, "netty.version");
        assert_eq!(result.property_usage_counts["netty.version"], 1);
    }

    #[test]
    fn test_dependency_management_can_be_skipped() {
        let project = Manifest {
            dependency_management: vec![
                ManifestDependency::new("com.fasterxml.jackson.core", "jackson-databind", "${jackson.version}"),
                ManifestDependency::new("io.netty", "netty-bom", "4.1.94.Final")
                    .with_type_and_scope("pom", "import"),
            ],
            ..Default::default()
        };

        let result = DependencyAnalyzer::analyze_with_options(
            Some(&project),
            AnalyzeOptions {
                include_dependency_management: false,
            },
        )
        .unwrap();
        assert!(result.dependencies.is_empty());
        assert_eq!(result.boms.len(), 1);
    }

    #[test]
    fn test_bom_imports_are_dependency_records() {
        let project = Manifest {
            dependency_management: vec![
                ManifestDependency::new("org.springframework.boot", "spring-boot-dependencies", "2.7.18")
                    .with_type_and_scope("pom", "import"),
                ManifestDependency::new("com.fasterxml.jackson.core", "jackson-databind", "2.15.2"),
            ],
            ..Default::default()
        };

        let result = DependencyAnalyzer::analyze(Some(&project)).unwrap();
        assert_eq!(result.boms.len(), 1);
        assert_eq!(result.dependencies.len(), 2);
        assert!(result
            .dependencies
            .contains_key("org.springframework.boot:spring-boot-dependencies"));
    }

    #[test]
    fn test_bom_import_counts_toward_its_property() {
        let project = Manifest {
            dependency_management: vec![ManifestDependency::new(
                "io.netty",
                "netty-bom",
                "${netty.version}",
            )
            .with_type_and_scope("pom", "import")],
            dependencies: vec![ManifestDependency::new(
                "io.netty",
                "netty-handler",
                "${netty.version}",
            )],
            ..Default::default()
        };

        let result = DependencyAnalyzer::analyze(Some(&project)).unwrap();
        assert_eq!(result.property_usage_counts["netty.version"], 2);
        assert_eq!(
            result.dependencies["io.netty:netty-bom"].property(),
            Some("netty.version")
        );
        assert_eq!(result.boms.len(), 1);
    }

    #[test]
    fn test_versioned_dependency_wins_over_bom_import() {
        let project = Manifest {
            dependencies: vec![ManifestDependency::new("io.netty", "netty-bom", "4.1.94.Final")],
            dependency_management: vec![ManifestDependency::new(
                "io.netty",
                "netty-bom",
                "${netty.version}",
            )
            .with_type_and_scope("pom", "import")],
            ..Default::default()
        };

        let result = DependencyAnalyzer::analyze(Some(&project)).unwrap();
        assert_eq!(result.dependencies["io.netty:netty-bom"].version, "4.1.94.Final");
        assert!(result.property_usage_counts.is_empty());
        assert_eq!(result.boms.len(), 1);
    }
}
