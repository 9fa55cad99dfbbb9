use crate::pom_analysis::domain::Patch;
use crate::pom_analysis::services::AnalyzeOptions;
use std::path::PathBuf;

/// AnalyzeRequest - Input of the analyze use case
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// Path to the POM file to analyse
    pub pom_path: PathBuf,
    /// Desired versions, in the order they were given
    pub patches: Vec<Patch>,
    pub options: AnalyzeOptions,
    /// Pull in properties from parent and sibling manifests
    pub search_properties: bool,
}

impl AnalyzeRequest {
    pub fn new(pom_path: PathBuf, patches: Vec<Patch>) -> Self {
        Self {
            pom_path,
            patches,
            options: AnalyzeOptions::default(),
            search_properties: false,
        }
    }

    pub fn with_options(mut self, options: AnalyzeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_property_search(mut self, enabled: bool) -> Self {
        self.search_properties = enabled;
        self
    }
}
