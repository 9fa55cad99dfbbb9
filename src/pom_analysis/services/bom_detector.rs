use crate::pom_analysis::domain::{is_bom_coordinates, AnalysisResult, BomInfo, ManifestDependency};

/// BomDetector service for classifying dependency-management entries
///
/// Pure logic: a BOM import is exactly `type=pom` + `scope=import`.
pub struct BomDetector;

impl BomDetector {
    /// True iff the declaration imports a BOM
    pub fn is_bom_import(dep: &ManifestDependency) -> bool {
        is_bom_coordinates(dep.dep_type.as_deref(), dep.scope.as_deref())
    }

    /// BOM imports among `managed`, in declaration order
    pub fn detect(managed: &[ManifestDependency]) -> Vec<BomInfo> {
        managed
            .iter()
            .filter(|dep| Self::is_bom_import(dep))
            .map(|dep| BomInfo {
                group_id: dep.group_id.clone(),
                artifact_id: dep.artifact_id.clone(),
                version: dep.version.clone(),
                bom_type: dep.dep_type.clone().unwrap_or_default(),
                scope: dep.scope.clone().unwrap_or_default(),
            })
            .collect()
    }

    /// First BOM whose groupId equals `group_id` exactly.
    ///
    /// Artifact names play no part: a `netty-bom` published under another group
    /// never matches `io.netty`.
    pub fn find_bom_for_group<'a>(
        analysis: &'a AnalysisResult,
        group_id: &str,
    ) -> Option<&'a BomInfo> {
        analysis.boms.iter().find(|bom| bom.group_id == group_id)
    }
}
