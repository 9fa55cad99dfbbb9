use crate::ports::outbound::PropertyLookup;
use std::collections::BTreeMap;

const REFERENCE_PREFIX: &str = "${";
const REFERENCE_SUFFIX: &str = "}";

/// Returns the property name when `version` is exactly one `${name}` reference.
///
/// Only the outermost delimiters are stripped and the body is kept verbatim:
/// `${ a }` yields `" a "`, `${${x}}` yields `"${x}"`. Anything outside the
/// delimiters (`1.0-${suffix}`), an unterminated `${x`, an empty body `${}` or an
/// empty string is a literal version and yields `None`.
pub fn extract_property_name(version: &str) -> Option<&str> {
    let body = version
        .strip_prefix(REFERENCE_PREFIX)?
        .strip_suffix(REFERENCE_SUFFIX)?;
    if body.is_empty() {
        return None;
    }
    Some(body)
}

/// Looks up property values: manifest properties first, then the optional
/// cross-manifest lookup.
///
/// Values are returned as written; a value that is itself a reference is not
/// followed, so circular definitions cannot loop.
pub struct PropertyResolver<'a> {
    properties: &'a BTreeMap<String, String>,
    lookup: Option<&'a dyn PropertyLookup>,
}

impl<'a> PropertyResolver<'a> {
    pub fn new(properties: &'a BTreeMap<String, String>) -> Self {
        Self {
            properties,
            lookup: None,
        }
    }

    /// Enables the cross-manifest fallback
    pub fn with_lookup(mut self, lookup: &'a dyn PropertyLookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Value of `name`, or `None` when it is undefined everywhere we can see
    pub fn resolve(&self, name: &str) -> Option<String> {
        if let Some(value) = self.properties.get(name) {
            return Some(value.clone());
        }
        self.lookup.and_then(|lookup| lookup.resolve_property(name))
    }

    /// Effective version for a raw version string: the property value for a
    /// reference, the string itself for a literal.
    pub fn resolve_version(&self, raw_version: &str) -> Option<String> {
        match extract_property_name(raw_version) {
            Some(name) => self.resolve(name),
            None => Some(raw_version.to_string()),
        }
    }
}
