use crate::pom_analysis::domain::Patch;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// PatchFileStore port for patch files
///
/// Dependency patch files are keyed by `groupId:artifactId` and property patch
/// files by property name. Merging overwrites entries with the same key and keeps
/// the rest.
pub trait PatchFileStore {
    /// Reads the patches listed in a dependency patch file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid patch list
    fn read_patches(&self, path: &Path) -> Result<Vec<Patch>>;

    /// Merges `patches` into the dependency patch file at `path`
    ///
    /// # Returns
    /// Number of entries in the written file; 0 when `patches` is empty and
    /// nothing was written
    fn merge_dependency_patches(&self, path: &Path, patches: &[Patch]) -> Result<usize>;

    /// Merges `properties` (name to value) into the property patch file at `path`
    ///
    /// # Returns
    /// Number of entries in the written file; 0 when `properties` is empty and
    /// nothing was written
    fn merge_property_patches(
        &self,
        path: &Path,
        properties: &BTreeMap<String, String>,
    ) -> Result<usize>;
}
