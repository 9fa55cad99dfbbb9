use super::file_writer::write_text_file;
use crate::pom_analysis::domain::{Patch, PatchList, PropertyList, PropertyPatch};
use crate::ports::outbound::PatchFileStore;
use crate::shared::error::PomBumpError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;

/// YamlPatchFileStore adapter for YAML patch files
///
/// ```yaml
/// patches:
///   - groupId: io.netty
///     artifactId: netty-bom
///     version: 4.1.118.Final
///     type: pom
///     scope: import
/// ```
///
/// Property files use `properties: [{property, value}]`. Entries are written
/// sorted by key.
pub struct YamlPatchFileStore;

impl YamlPatchFileStore {
    pub fn new() -> Self {
        Self
    }

    /// Existing document at `path` for merging.
    ///
    /// A missing file is an empty document. A file that cannot be read or parsed is
    /// replaced, so it is logged and treated as empty too.
    fn load_for_merge<T: DeserializeOwned + Default>(path: &Path) -> T {
        if !path.exists() {
            return T::default();
        }
        match read_regular_file(path, "patch file")
            .and_then(|content| Ok(serde_yaml_ng::from_str::<T>(&content)?))
        {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "existing patch file is unreadable and will be replaced"
                );
                T::default()
            }
        }
    }

    fn write_yaml<T: serde::Serialize>(path: &Path, document: &T) -> Result<()> {
        let yaml = serde_yaml_ng::to_string(document)
            .with_context(|| format!("Failed to serialize {}", path.display()))?;
        write_text_file(path, &yaml)
    }
}

impl Default for YamlPatchFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PatchFileStore for YamlPatchFileStore {
    fn read_patches(&self, path: &Path) -> Result<Vec<Patch>> {
        let content = read_regular_file(path, "patch file").map_err(|e| {
            PomBumpError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        let list: PatchList = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse patch file {}", path.display()))?;

        for patch in &list.patches {
            if patch.group_id.trim().is_empty()
                || patch.artifact_id.trim().is_empty()
                || patch.version.trim().is_empty()
            {
                return Err(PomBumpError::InvalidPatch {
                    spec: patch.to_string(),
                    reason: format!(
                        "groupId, artifactId and version are required in {}",
                        path.display()
                    ),
                }
                .into());
            }
        }

        Ok(list.patches)
    }

    fn merge_dependency_patches(&self, path: &Path, patches: &[Patch]) -> Result<usize> {
        if patches.is_empty() {
            return Ok(0);
        }

        let existing: PatchList = Self::load_for_merge(path);
        let mut merged: BTreeMap<String, Patch> = existing
            .patches
            .into_iter()
            .map(|patch| (patch.key(), patch))
            .collect();
        for patch in patches {
            merged.insert(patch.key(), patch.clone());
        }

        let document = PatchList {
            patches: merged.into_values().collect(),
        };
        Self::write_yaml(path, &document)?;
        Ok(document.patches.len())
    }

    fn merge_property_patches(
        &self,
        path: &Path,
        properties: &BTreeMap<String, String>,
    ) -> Result<usize> {
        if properties.is_empty() {
            return Ok(0);
        }

        let existing: PropertyList = Self::load_for_merge(path);
        let mut merged: BTreeMap<String, String> = existing
            .properties
            .into_iter()
            .map(|entry| (entry.property, entry.value))
            .collect();
        merged.extend(
            properties
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );

        let document = PropertyList {
            properties: merged
                .into_iter()
                .map(|(property, value)| PropertyPatch { property, value })
                .collect(),
        };
        Self::write_yaml(path, &document)?;
        Ok(document.properties.len())
    }
}
