use pombump::prelude::*;

/// Mock PropertyLookup for testing
///
/// Serves properties in the order they were added.
#[derive(Default)]
pub struct MockPropertyLookup {
    properties: Vec<(String, String)>,
}

impl MockPropertyLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.push((name.to_string(), value.to_string()));
        self
    }
}

impl PropertyLookup for MockPropertyLookup {
    fn tree_properties(&self) -> Vec<(String, String)> {
        self.properties.clone()
    }
}
