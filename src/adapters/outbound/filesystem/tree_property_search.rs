use crate::pom_analysis::domain::{Manifest, DEFAULT_MODULE_MANIFEST};
use crate::ports::outbound::{ManifestReader, PropertyLookup};
use std::cell::OnceCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// How many `<parent>` links are followed upwards
pub const MAX_PARENT_DEPTH: usize = 10;

/// TreePropertySearch adapter for properties defined in related POM files
///
/// Search order, starting from the analysed manifest:
/// 1. the manifest itself, then each of its `<modules>`;
/// 2. its parent (via `<relativePath>`, default `../pom.xml`), then the parent's
///    `<modules>`, i.e. the siblings;
/// 3. the same for every further ancestor, at most [`MAX_PARENT_DEPTH`] levels up.
///
/// Modules are visited one level deep in declaration order. Every file is read at
/// most once. Files that are missing or fail to parse are skipped.
///
/// The tree is scanned lazily on first use and cached.
pub struct TreePropertySearch<R: ManifestReader> {
    reader: R,
    start: PathBuf,
    scanned: OnceCell<Vec<(String, String)>>,
}

impl<R: ManifestReader> TreePropertySearch<R> {
    pub fn new(reader: R, start: PathBuf) -> Self {
        Self {
            reader,
            start,
            scanned: OnceCell::new(),
        }
    }

    fn scan(&self) -> Vec<(String, String)> {
        let mut walk = Walk {
            reader: &self.reader,
            visited: HashSet::new(),
            found: Vec::new(),
        };

        let mut current = walk.visit(&self.start);
        let mut depth = 0;
        while let Some((path, manifest)) = current.take() {
            walk.visit_modules(&path, &manifest);

            if depth == MAX_PARENT_DEPTH {
                tracing::debug!(path = %path.display(), "parent depth limit reached");
                break;
            }
            depth += 1;

            current = parent_manifest_path(&path, &manifest).and_then(|parent| walk.visit(&parent));
        }

        tracing::debug!(
            manifests = walk.visited.len(),
            properties = walk.found.len(),
            "manifest tree scanned"
        );
        walk.found
    }
}

impl<R: ManifestReader> PropertyLookup for TreePropertySearch<R> {
    fn tree_properties(&self) -> Vec<(String, String)> {
        self.scanned.get_or_init(|| self.scan()).clone()
    }
}

struct Walk<'r, R: ManifestReader> {
    reader: &'r R,
    visited: HashSet<PathBuf>,
    found: Vec<(String, String)>,
}

impl<R: ManifestReader> Walk<'_, R> {
    /// Reads `path` unless it was seen before, recording its properties
    fn visit(&mut self, path: &Path) -> Option<(PathBuf, Manifest)> {
        let path = canonicalize_or_fallback(path);
        if !self.visited.insert(path.clone()) {
            return None;
        }

        match self.reader.read_manifest(&path) {
            Ok(manifest) => {
                tracing::debug!(path = %path.display(), properties = manifest.properties.len(), "manifest visited");
                self.found.extend(
                    manifest
                        .properties
                        .iter()
                        .map(|(name, value)| (name.clone(), value.clone())),
                );
                Some((path, manifest))
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable manifest");
                None
            }
        }
    }

    fn visit_modules(&mut self, manifest_path: &Path, manifest: &Manifest) {
        let Some(base) = manifest_path.parent() else {
            return;
        };
        for module in &manifest.modules {
            self.visit(&module_manifest_path(&base.join(module)));
        }
    }
}

/// Location of the parent manifest, or `None` without a `<parent>` or with an
/// empty `<relativePath/>`
fn parent_manifest_path(manifest_path: &Path, manifest: &Manifest) -> Option<PathBuf> {
    let relative = manifest.parent.as_ref()?.manifest_path()?;
    let base = manifest_path.parent()?;
    Some(module_manifest_path(&base.join(relative)))
}

/// A path naming a directory points at the `pom.xml` inside it
fn module_manifest_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DEFAULT_MODULE_MANIFEST)
    } else {
        path.to_path_buf()
    }
}

fn canonicalize_or_fallback(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
