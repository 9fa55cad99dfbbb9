use super::bom_info::BomInfo;
use serde::Serialize;
use std::collections::BTreeMap;

/// How a group of disagreeing patches should be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    /// Apply the patches individually
    Direct,
    /// Edit the shared version property
    UpdateProperty,
    /// Bump the BOM import that manages the group
    UpdateBom,
}

impl std::fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecommendedAction::Direct => "direct",
            RecommendedAction::UpdateProperty => "update_property",
            RecommendedAction::UpdateBom => "update_bom",
        };
        write!(f, "{}", name)
    }
}

/// Patches of one group that request different versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionConflict {
    #[serde(rename = "groupId")]
    pub group_id: String,
    /// artifactId to the version requested for it
    pub requested_versions: BTreeMap<String, String>,
    pub recommended_action: RecommendedAction,
    /// Set only for [`RecommendedAction::UpdateBom`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bom_candidate: Option<BomInfo>,
    /// Set only for [`RecommendedAction::UpdateBom`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_version: Option<String>,
}
