use super::manifest::dependency_key;
use serde::Serialize;

/// Semantic record for one `groupId:artifactId` declared by the manifest.
///
/// `uses_property` is true only when the whole version string is a single
/// `${name}` reference; `property_name` is empty otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyInfo {
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    pub version: String,
    pub uses_property: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub property_name: String,
}

impl DependencyInfo {
    pub fn key(&self) -> String {
        dependency_key(&self.group_id, &self.artifact_id)
    }

    /// Property this dependency's version is bound to, if any
    pub fn property(&self) -> Option<&str> {
        self.uses_property.then_some(self.property_name.as_str())
    }
}

/// A dependency reached through another artifact.
///
/// Informational only: the strategy engine never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitiveDependency {
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    pub version: String,
    /// Ancestor artifact names from the direct dependency down to this one
    pub path: Vec<String>,
}
