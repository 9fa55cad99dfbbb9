//! pombump - version patch planning for Maven POM files
//!
//! This library analyzes a POM file and decides how a set of requested
//! dependency versions should be applied: as direct version edits, as edits to
//! a shared version property, or as a bump of a BOM import, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`pom_analysis`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pombump::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let pom = PathBuf::from("pom.xml");
//!
//! // Create adapters
//! let property_lookup = TreePropertySearch::new(FileSystemReader::new(), pom.clone());
//! let use_case = AnalyzeManifestUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//!     Some(property_lookup),
//! );
//!
//! // Execute
//! let patches = parse_patch_specs("io.netty@netty-handler@4.1.118.Final")?;
//! let request = AnalyzeRequest::new(pom, patches).with_property_search(true);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let report = AnalysisReportBuilder::build(&response);
//! let output = JsonFormatter::new().format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod pom_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter, TreePropertySearch,
        YamlPatchFileStore,
    };
    pub use crate::adapters::outbound::formatters::{HumanFormatter, JsonFormatter, YamlFormatter};
    pub use crate::application::dto::{AnalyzeRequest, AnalyzeResponse, OutputFormat};
    pub use crate::application::read_models::{AnalysisReport, AnalysisReportBuilder};
    pub use crate::application::use_cases::AnalyzeManifestUseCase;
    pub use crate::pom_analysis::domain::{
        parse_patch_specs, AnalysisResult, BomInfo, DependencyInfo, Manifest, ManifestDependency,
        Patch, PatchPlan, RecommendedAction, VersionConflict,
    };
    pub use crate::pom_analysis::services::{
        calculate_optimal_bom_version, AnalyzeOptions, DependencyAnalyzer, PatchStrategy,
    };
    pub use crate::ports::outbound::{
        ManifestReader, OutputPresenter, PatchFileStore, ProgressReporter, PropertyLookup,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
