use super::bom_detector::BomDetector;
use super::conflict_detector::detect_version_conflicts;
use crate::pom_analysis::domain::{AnalysisResult, Patch, PatchPlan, RecommendedAction};
use std::collections::btree_map::Entry;
use std::collections::HashSet;

/// PatchStrategy service for turning desired patches into manifest edits
///
/// Pure function of the analysis and the requested patches:
/// 1. Groups whose patches disagree and that have a BOM import collapse into one
///    BOM update at the highest requested version.
/// 2. Every other patch is looked up by `groupId:artifactId`. Dependencies bound to
///    a property become a property edit; anything else (literal versions, unknown
///    artifacts) is passed through as a direct patch. A direct patch on a BOM import
///    keeps `type=pom, scope=import`.
/// 3. When two patches stage different values for one property the first one is
///    kept and the later one is reported as a warning.
/// 4. A direct patch in a group managed by an imported BOM is reported, since the
///    BOM may still pin that artifact.
pub struct PatchStrategy;

impl PatchStrategy {
    pub fn plan(analysis: &AnalysisResult, patches: &[Patch]) -> PatchPlan {
        let conflicts = detect_version_conflicts(analysis, patches);
        let mut plan = PatchPlan::default();

        let mut bom_managed_groups = HashSet::new();
        for conflict in &conflicts {
            match (
                conflict.recommended_action,
                &conflict.bom_candidate,
                &conflict.optimal_version,
            ) {
                (RecommendedAction::UpdateBom, Some(bom), Some(version)) => {
                    plan.warnings.push(format!(
                        "Version conflict in {}: {} patches request different versions; \
                         updating {}:{} to {} instead",
                        conflict.group_id,
                        conflict.requested_versions.len(),
                        bom.group_id,
                        bom.artifact_id,
                        version
                    ));
                    plan.direct_patches
                        .push(Patch::bom_import(&bom.group_id, &bom.artifact_id, version));
                    bom_managed_groups.insert(conflict.group_id.as_str());
                }
                (RecommendedAction::UpdateProperty, _, _) => plan.warnings.push(format!(
                    "Version conflict in {}: the patches share one version property, the first requested version is kept",
                    conflict.group_id
                )),
                _ => plan.warnings.push(format!(
                    "Version conflict in {}: no BOM import manages this group, patches are applied individually",
                    conflict.group_id
                )),
            }
        }

        for patch in patches {
            if bom_managed_groups.contains(patch.group_id.as_str()) {
                continue;
            }

            let key = patch.key();
            let targets_bom = analysis
                .boms
                .iter()
                .any(|bom| bom.group_id == patch.group_id && bom.artifact_id == patch.artifact_id);
            if targets_bom {
                plan.warnings.push(format!(
                    "{} is a BOM import; the new version applies to every artifact it manages",
                    key
                ));
            }

            let property = analysis
                .dependencies
                .get(&key)
                .and_then(|dep| dep.property());

            match property {
                Some(name) => Self::stage_property(&mut plan, analysis, name, patch),
                None if targets_bom => plan.direct_patches.push(Patch::bom_import(
                    &patch.group_id,
                    &patch.artifact_id,
                    &patch.version,
                )),
                None => {
                    if let Some(bom) = BomDetector::find_bom_for_group(analysis, &patch.group_id) {
                        plan.warnings.push(format!(
                            "BOM {} may override patches for {}",
                            bom.artifact_id, key
                        ));
                    }
                    plan.direct_patches.push(patch.clone());
                }
            }
        }

        tracing::debug!(
            direct = plan.direct_patches.len(),
            properties = plan.property_patches.len(),
            conflicts = conflicts.len(),
            "patch plan computed"
        );

        plan.conflicts = conflicts;
        plan
    }

    fn stage_property(plan: &mut PatchPlan, analysis: &AnalysisResult, name: &str, patch: &Patch) {
        match plan.property_patches.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                tracing::debug!(
                    property = name,
                    version = %patch.version,
                    affected = analysis.affected_dependencies(name).len(),
                    "property edit staged"
                );
                slot.insert(patch.version.clone());
            }
            Entry::Occupied(staged) => {
                if staged.get() != &patch.version {
                    plan.warnings.push(format!(
                        "Property {} is already set to {}; ignoring {} requested for {}",
                        name,
                        staged.get(),
                        patch.version,
                        patch.key()
                    ));
                }
            }
        }
    }
}
