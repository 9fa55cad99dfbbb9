use super::bom_detector::BomDetector;
use crate::pom_analysis::domain::{AnalysisResult, Patch, RecommendedAction, VersionConflict};
use crate::pom_analysis::policies::highest_version;
use std::collections::BTreeMap;

/// Finds groups of desired patches that disagree on the version.
///
/// Patches are grouped by groupId, groups ordered by first appearance. A group with
/// two or more patches requesting different versions is a conflict. When the
/// analysed manifest imports a BOM for the group the conflict is resolved by bumping
/// that BOM to the highest requested version. Without a BOM, a group whose patches
/// all target dependencies bound to the same property is reported with
/// [`RecommendedAction::UpdateProperty`] (the property edit keeps the first requested
/// version); any other group gets [`RecommendedAction::Direct`] and its patches are
/// handled one by one.
pub fn detect_version_conflicts(
    analysis: &AnalysisResult,
    patches: &[Patch],
) -> Vec<VersionConflict> {
    group_by_group_id(patches)
        .into_iter()
        .filter(|(_, group)| has_differing_versions(group))
        .map(|(group_id, group)| {
            let requested_versions: BTreeMap<String, String> = group
                .iter()
                .map(|patch| (patch.artifact_id.clone(), patch.version.clone()))
                .collect();

            match BomDetector::find_bom_for_group(analysis, group_id) {
                Some(bom) => {
                    let optimal = calculate_optimal_bom_version(&requested_versions);
                    tracing::debug!(
                        group = group_id,
                        bom = %bom.artifact_id,
                        version = %optimal,
                        "conflicting patches collapse into a BOM update"
                    );
                    VersionConflict {
                        group_id: group_id.to_string(),
                        requested_versions,
                        recommended_action: RecommendedAction::UpdateBom,
                        bom_candidate: Some(bom.clone()),
                        optimal_version: Some(optimal),
                    }
                }
                None => {
                    let recommended_action = match shared_property(analysis, &group) {
                        Some(property) => {
                            tracing::debug!(
                                group = group_id,
                                property,
                                "conflicting patches share one version property"
                            );
                            RecommendedAction::UpdateProperty
                        }
                        None => RecommendedAction::Direct,
                    };
                    VersionConflict {
                        group_id: group_id.to_string(),
                        requested_versions,
                        recommended_action,
                        bom_candidate: None,
                        optimal_version: None,
                    }
                }
            }
        })
        .collect()
}

/// Highest of the requested versions, or an empty string when nothing was requested
pub fn calculate_optimal_bom_version(requested_versions: &BTreeMap<String, String>) -> String {
    highest_version(requested_versions.values().map(String::as_str))
        .unwrap_or_default()
        .to_string()
}

fn group_by_group_id(patches: &[Patch]) -> Vec<(&str, Vec<&Patch>)> {
    let mut groups: Vec<(&str, Vec<&Patch>)> = Vec::new();
    for patch in patches {
        match groups
            .iter_mut()
            .find(|(group_id, _)| *group_id == patch.group_id)
        {
            Some((_, members)) => members.push(patch),
            None => groups.push((patch.group_id.as_str(), vec![patch])),
        }
    }
    groups
}

/// The property every patch of the group resolves to, if there is exactly one
fn shared_property<'a>(analysis: &'a AnalysisResult, group: &[&Patch]) -> Option<&'a str> {
    let mut properties = group.iter().map(|patch| {
        analysis
            .dependencies
            .get(&patch.key())
            .and_then(|dep| dep.property())
    });
    let first = properties.next()??;
    properties
        .all(|property| property == Some(first))
        .then_some(first)
}

fn has_differing_versions(group: &[&Patch]) -> bool {
    match group.split_first() {
        Some((first, rest)) => rest.iter().any(|patch| patch.version != first.version),
        None => false,
    }
}
