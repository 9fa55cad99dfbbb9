//! POM XML to [`Manifest`] conversion.
//!
//! Values are taken verbatim (trimmed); property references are left unresolved.

use crate::pom_analysis::domain::{Manifest, ManifestDependency, ParentRef};
use crate::shared::Result;
use roxmltree::{Document, Node};

const PROJECT_ELEMENT: &str = "project";

/// Parses POM content into the manifest model
///
/// # Errors
/// Returns an error if the content is not well-formed XML or the root element is
/// not `<project>`
pub fn parse_pom(content: &str) -> Result<Manifest> {
    let doc = Document::parse(content)?;
    let project = doc.root_element();

    if project.tag_name().name() != PROJECT_ELEMENT {
        anyhow::bail!(
            "expected <{}> as root element, found <{}>",
            PROJECT_ELEMENT,
            project.tag_name().name()
        );
    }

    let mut manifest = Manifest {
        group_id: child_text(&project, "groupId"),
        artifact_id: child_text(&project, "artifactId"),
        version: child_text(&project, "version"),
        packaging: child_text(&project, "packaging"),
        ..Default::default()
    };

    if let Some(parent) = child_element(&project, "parent") {
        manifest.parent = Some(ParentRef {
            group_id: child_text(&parent, "groupId").unwrap_or_default(),
            artifact_id: child_text(&parent, "artifactId").unwrap_or_default(),
            version: child_text(&parent, "version").unwrap_or_default(),
            // <relativePath/> is meaningful: it switches the lookup off
            relative_path: child_element(&parent, "relativePath")
                .map(|node| node.text().unwrap_or_default().trim().to_string()),
        });
    }

    if let Some(properties) = child_element(&project, "properties") {
        for property in properties.children().filter(Node::is_element) {
            let value = property.text().unwrap_or_default().trim().to_string();
            manifest
                .properties
                .insert(property.tag_name().name().to_string(), value);
        }
    }

    if let Some(dependencies) = child_element(&project, "dependencies") {
        manifest.dependencies = parse_dependencies(&dependencies);
    }

    if let Some(dependencies) = child_element(&project, "dependencyManagement")
        .and_then(|management| child_element(&management, "dependencies"))
    {
        manifest.dependency_management = parse_dependencies(&dependencies);
    }

    if let Some(modules) = child_element(&project, "modules") {
        manifest.modules = modules
            .children()
            .filter(|node| node.is_element() && node.has_tag_name("module"))
            .filter_map(|node| node.text())
            .map(str::trim)
            .filter(|module| !module.is_empty())
            .map(str::to_string)
            .collect();
    }

    Ok(manifest)
}

fn parse_dependencies(node: &Node<'_, '_>) -> Vec<ManifestDependency> {
    node.children()
        .filter(|child| child.is_element() && child.has_tag_name("dependency"))
        .map(|dep| ManifestDependency {
            group_id: child_text(&dep, "groupId").unwrap_or_default(),
            artifact_id: child_text(&dep, "artifactId").unwrap_or_default(),
            version: child_text(&dep, "version").unwrap_or_default(),
            dep_type: child_text(&dep, "type"),
            scope: child_text(&dep, "scope"),
        })
        .collect()
}

fn child_element<'a, 'input>(node: &Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

fn child_text(node: &Node<'_, '_>, name: &str) -> Option<String> {
    child_element(node, name)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
