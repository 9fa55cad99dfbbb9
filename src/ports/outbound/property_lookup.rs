/// PropertyLookup port for properties defined outside the analysed manifest
///
/// Implementations search related manifests (parents, sibling modules). Failing
/// to find a property is never an error.
pub trait PropertyLookup {
    /// Every property found, in search order.
    ///
    /// A name may appear more than once; the first occurrence wins.
    fn tree_properties(&self) -> Vec<(String, String)>;

    /// Value of `name` from the first manifest in search order that defines it
    fn resolve_property(&self, name: &str) -> Option<String> {
        self.tree_properties()
            .into_iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| value)
    }
}
