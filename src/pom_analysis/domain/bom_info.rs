use serde::{Deserialize, Serialize};

/// Dependency type that marks a BOM import
pub const BOM_TYPE: &str = "pom";

/// Dependency scope that marks a BOM import
pub const BOM_SCOPE: &str = "import";

/// A Bill-of-Materials import found in `<dependencyManagement>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomInfo {
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    pub version: String,
    #[serde(rename = "type")]
    pub bom_type: String,
    pub scope: String,
}

impl BomInfo {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            bom_type: BOM_TYPE.to_string(),
            scope: BOM_SCOPE.to_string(),
        }
    }

    /// True iff `type == "pom"` and `scope == "import"`
    pub fn is_bom(&self) -> bool {
        is_bom_coordinates(Some(&self.bom_type), Some(&self.scope))
    }
}

/// The BOM predicate on raw `<type>` / `<scope>` values.
///
/// Comparison is exact: `POM` or ` import` do not qualify.
pub fn is_bom_coordinates(dep_type: Option<&str>, scope: Option<&str>) -> bool {
    dep_type == Some(BOM_TYPE) && scope == Some(BOM_SCOPE)
}
