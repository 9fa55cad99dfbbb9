//! In-memory model of a parsed build manifest (POM).
//!
//! This is the entity set the manifest parser hands to the analyzer. Only the parts
//! the analysis needs are modeled; plugins, profiles and repositories are ignored.

use std::collections::BTreeMap;

/// Default location of a parent POM relative to the child's `pom.xml`
pub const DEFAULT_PARENT_RELATIVE_PATH: &str = "../pom.xml";

/// File name of a module's manifest inside its directory
pub const DEFAULT_MODULE_MANIFEST: &str = "pom.xml";

/// A single `<dependency>` declaration, as written.
///
/// Missing elements are empty strings / `None`; nothing is inherited or interpolated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDependency {
    pub group_id: String,
    pub artifact_id: String,
    /// Raw version text, possibly a `${property}` reference, empty when omitted
    pub version: String,
    pub dep_type: Option<String>,
    pub scope: Option<String>,
}

impl ManifestDependency {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            dep_type: None,
            scope: None,
        }
    }

    /// Builder-style setter for `<type>` and `<scope>`
    pub fn with_type_and_scope(mut self, dep_type: &str, scope: &str) -> Self {
        self.dep_type = Some(dep_type.to_string());
        self.scope = Some(scope.to_string());
        self
    }

    /// Map key used throughout the analysis: `groupId:artifactId`
    pub fn key(&self) -> String {
        dependency_key(&self.group_id, &self.artifact_id)
    }
}

/// `<parent>` reference of a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// `<relativePath>`; `None` means the Maven default of `../pom.xml`
    pub relative_path: Option<String>,
}

impl ParentRef {
    /// Relative path to the parent manifest, applying the Maven default.
    ///
    /// An explicitly empty `<relativePath/>` disables filesystem lookup and yields `None`.
    pub fn manifest_path(&self) -> Option<&str> {
        match self.relative_path.as_deref() {
            None => Some(DEFAULT_PARENT_RELATIVE_PATH),
            Some("") => None,
            Some(path) => Some(path),
        }
    }
}

/// A parsed project manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub parent: Option<ParentRef>,
    pub properties: BTreeMap<String, String>,
    pub dependencies: Vec<ManifestDependency>,
    /// Entries of `<dependencyManagement><dependencies>`
    pub dependency_management: Vec<ManifestDependency>,
    /// `<modules>` entries, relative directory names in declaration order
    pub modules: Vec<String>,
}

/// Builds the `groupId:artifactId` key used for dependency and patch maps
pub fn dependency_key(group_id: &str, artifact_id: &str) -> String {
    format!("{}:{}", group_id, artifact_id)
}
