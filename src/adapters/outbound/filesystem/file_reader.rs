use super::pom_parser::parse_pom;
use crate::pom_analysis::domain::Manifest;
use crate::ports::outbound::ManifestReader;
use crate::shared::error::PomBumpError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for loading POM files from disk
///
/// Reads go through the shared security checks (no symlinks, regular files only,
/// size limit) before the XML is parsed.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<Manifest> {
        if !path.exists() {
            return Err(PomBumpError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "No POM file at \"{}\".\n   \
                     Pass the path to an existing pom.xml, e.g. `pombump analyze ./pom.xml`.",
                    path.display()
                ),
            }
            .into());
        }

        let content = read_regular_file(path, "POM file").map_err(|e| {
            PomBumpError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        parse_pom(&content).map_err(|e| {
            PomBumpError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
