pub mod bom_detector;
pub mod conflict_detector;
pub mod dependency_analyzer;
pub mod patch_strategy;
pub mod property_resolver;

pub use bom_detector::BomDetector;
pub use conflict_detector::{calculate_optimal_bom_version, detect_version_conflicts};
pub use dependency_analyzer::{AnalyzeOptions, DependencyAnalyzer};
pub use patch_strategy::PatchStrategy;
pub use property_resolver::{extract_property_name, PropertyResolver};
