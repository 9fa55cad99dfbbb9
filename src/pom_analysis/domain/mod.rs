pub mod analysis_result;
pub mod bom_info;
pub mod dependency_info;
pub mod manifest;
pub mod patch;
pub mod patch_plan;
pub mod version_conflict;

pub use analysis_result::AnalysisResult;
pub use bom_info::{is_bom_coordinates, BomInfo};
pub use dependency_info::{DependencyInfo, TransitiveDependency};
pub use manifest::{
    dependency_key, Manifest, ManifestDependency, ParentRef, DEFAULT_MODULE_MANIFEST,
};
pub use patch::{parse_patch_specs, Patch, PatchList, PropertyList, PropertyPatch};
pub use patch_plan::PatchPlan;
pub use version_conflict::{RecommendedAction, VersionConflict};
