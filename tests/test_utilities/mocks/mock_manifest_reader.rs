use pombump::prelude::*;
use std::path::Path;

/// Mock ManifestReader for testing
///
/// Returns a fixed manifest, or a parse error when built with [`MockManifestReader::failing`].
pub struct MockManifestReader {
    manifest: Option<Manifest>,
}

impl MockManifestReader {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest: Some(manifest),
        }
    }

    pub fn failing() -> Self {
        Self { manifest: None }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<Manifest> {
        match &self.manifest {
            Some(manifest) => Ok(manifest.clone()),
            None => Err(anyhow::anyhow!(
                "failed to parse POM file: {}\nDetails: mock read failure",
                path.display()
            )),
        }
    }
}
