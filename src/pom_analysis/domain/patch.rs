use super::manifest::dependency_key;
use crate::shared::error::PomBumpError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Separator between the parts of a `groupId@artifactId@version` spec
const SPEC_SEPARATOR: char = '@';

/// A desired version for one artifact.
///
/// Callers supply plain (group, artifact, version) targets. Patches produced for a BOM
/// update additionally carry `type: pom` and `scope: import`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    pub version: String,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dep_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl Patch {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            dep_type: None,
            scope: None,
        }
    }

    /// Patch for a BOM import (`type=pom`, `scope=import`)
    pub fn bom_import(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            dep_type: Some("pom".to_string()),
            scope: Some("import".to_string()),
            ..Self::new(group_id, artifact_id, version)
        }
    }

    /// `groupId:artifactId`
    pub fn key(&self) -> String {
        dependency_key(&self.group_id, &self.artifact_id)
    }
}

impl std::fmt::Display for Patch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.group_id,
            self.artifact_id,
            self.version,
            sep = SPEC_SEPARATOR
        )
    }
}

impl FromStr for Patch {
    type Err = PomBumpError;

    /// Parses `groupId@artifactId@version`
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = spec.split(SPEC_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(PomBumpError::InvalidPatch {
                spec: spec.to_string(),
                reason: format!(
                    "expected 3 '{}'-separated parts, found {}",
                    SPEC_SEPARATOR,
                    parts.len()
                ),
            });
        }

        if let Some(position) = parts.iter().position(|part| part.trim().is_empty()) {
            let field = ["groupId", "artifactId", "version"][position];
            return Err(PomBumpError::InvalidPatch {
                spec: spec.to_string(),
                reason: format!("{} must not be empty", field),
            });
        }

        Ok(Patch::new(parts[0], parts[1], parts[2]))
    }
}

/// Parses a whitespace-separated list of `groupId@artifactId@version` specs.
///
/// An empty or blank input yields an empty list.
pub fn parse_patch_specs(specs: &str) -> Result<Vec<Patch>, PomBumpError> {
    specs.split_whitespace().map(Patch::from_str).collect()
}

/// On-disk document of dependency patches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchList {
    #[serde(default)]
    pub patches: Vec<Patch>,
}

/// One property edit in a property patch file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPatch {
    pub property: String,
    pub value: String,
}

/// On-disk document of property patches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyList {
    #[serde(default)]
    pub properties: Vec<PropertyPatch>,
}
