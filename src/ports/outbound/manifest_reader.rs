use crate::pom_analysis::domain::Manifest;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for loading a POM into the manifest model
pub trait ManifestReader {
    /// Reads and parses the manifest at `path`
    ///
    /// # Arguments
    /// * `path` - Path to a `pom.xml` file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file cannot be read
    /// - The content is not a well-formed POM
    fn read_manifest(&self, path: &Path) -> Result<Manifest>;
}
