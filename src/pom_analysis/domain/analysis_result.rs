use super::bom_info::BomInfo;
use super::dependency_info::{DependencyInfo, TransitiveDependency};
use std::collections::BTreeMap;

/// Aggregate produced by one manifest analysis.
///
/// All containers are always present. After construction the only mutation is
/// [`AnalysisResult::add_missing_properties`], which never replaces an existing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    /// DependencyInfo keyed by `groupId:artifactId`
    pub dependencies: BTreeMap<String, DependencyInfo>,
    /// Property name to defined value
    pub properties: BTreeMap<String, String>,
    /// Property name to the number of distinct dependencies referencing it
    pub property_usage_counts: BTreeMap<String, usize>,
    /// BOM imports in declaration order
    pub boms: Vec<BomInfo>,
    pub transitive_dependencies: Vec<TransitiveDependency>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record for `info.key()`, keeping usage counts
    /// consistent with the records actually stored.
    pub fn record_dependency(&mut self, info: DependencyInfo) {
        if let Some(previous) = self.dependencies.remove(&info.key()) {
            if let Some(name) = previous.property() {
                self.decrement_usage(name);
            }
        }
        if let Some(name) = info.property() {
            *self
                .property_usage_counts
                .entry(name.to_string())
                .or_insert(0) += 1;
        }
        self.dependencies.insert(info.key(), info);
    }

    fn decrement_usage(&mut self, name: &str) {
        if let Some(count) = self.property_usage_counts.get_mut(name) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.property_usage_counts.remove(name);
            }
        }
    }

    /// Adds definitions for names not yet defined, in iteration order.
    ///
    /// The first definition of a name wins; existing entries are never touched.
    /// Returns the number of properties added.
    pub fn add_missing_properties<I>(&mut self, definitions: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut added = 0;
        for (name, value) in definitions {
            if !self.properties.contains_key(&name) {
                self.properties.insert(name, value);
                added += 1;
            }
        }
        added
    }

    /// Dependencies whose version is bound to `property_name`, ordered by key
    pub fn affected_dependencies(&self, property_name: &str) -> Vec<&DependencyInfo> {
        if property_name.is_empty() {
            return Vec::new();
        }
        self.dependencies
            .values()
            .filter(|dep| dep.property() == Some(property_name))
            .collect()
    }

    /// Property name to the keys of the dependencies using it
    pub fn property_used_by(&self) -> BTreeMap<String, Vec<String>> {
        let mut used_by: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, dep) in &self.dependencies {
            if let Some(name) = dep.property() {
                used_by.entry(name.to_string()).or_default().push(key.clone());
            }
        }
        used_by
    }

    /// Number of dependency records bound to a property
    pub fn dependencies_using_properties(&self) -> usize {
        self.dependencies
            .values()
            .filter(|dep| dep.uses_property)
            .count()
    }

    /// Referenced properties with no definition in [`AnalysisResult::properties`]
    pub fn undefined_properties(&self) -> Vec<&str> {
        self.property_usage_counts
            .keys()
            .filter(|name| !self.properties.contains_key(*name))
            .map(String::as_str)
            .collect()
    }
}
