use super::patch::Patch;
use super::version_conflict::VersionConflict;
use std::collections::BTreeMap;

/// Edits recommended for one batch of desired patches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchPlan {
    /// Declarations to edit directly, BOM updates included
    pub direct_patches: Vec<Patch>,
    /// Property name to its new value
    pub property_patches: BTreeMap<String, String>,
    pub conflicts: Vec<VersionConflict>,
    pub warnings: Vec<String>,
}

impl PatchPlan {
    pub fn is_empty(&self) -> bool {
        self.direct_patches.is_empty() && self.property_patches.is_empty()
    }
}
