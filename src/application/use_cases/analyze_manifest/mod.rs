use crate::application::dto::{AnalyzeRequest, AnalyzeResponse};
use crate::pom_analysis::domain::{AnalysisResult, Manifest};
use crate::pom_analysis::services::{DependencyAnalyzer, PatchStrategy, PropertyResolver};
use crate::ports::outbound::{ManifestReader, ProgressReporter, PropertyLookup};
use crate::shared::Result;

/// Number of steps reported through the progress bar
const TOTAL_STEPS: usize = 4;

/// AnalyzeManifestUseCase - Core use case for POM analysis and patch planning
///
/// Orchestrates the workflow with generic dependency injection for all
/// infrastructure dependencies.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `PR` - ProgressReporter implementation
/// * `PL` - PropertyLookup implementation (optional)
pub struct AnalyzeManifestUseCase<MR, PR, PL> {
    manifest_reader: MR,
    progress_reporter: PR,
    property_lookup: Option<PL>,
}

impl<MR, PR, PL> AnalyzeManifestUseCase<MR, PR, PL>
where
    MR: ManifestReader,
    PR: ProgressReporter,
    PL: PropertyLookup,
{
    /// Creates a new AnalyzeManifestUseCase with injected dependencies
    pub fn new(manifest_reader: MR, progress_reporter: PR, property_lookup: Option<PL>) -> Self {
        Self {
            manifest_reader,
            progress_reporter,
            property_lookup,
        }
    }

    /// Executes the analysis
    ///
    /// # Arguments
    /// * `request` - POM path, desired patches and analysis options
    ///
    /// # Returns
    /// AnalyzeResponse with the analysis, the patch plan and all warnings
    ///
    /// # Errors
    /// Returns an error if the POM cannot be read or parsed. Missing properties and
    /// version conflicts are warnings, not errors.
    pub fn execute(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
        // Step 1: Read the manifest
        let manifest = self.read_manifest(&request)?;

        // Step 2: Build the analysis
        self.progress_reporter
            .report_progress(2, TOTAL_STEPS, Some("analyzing dependencies"));
        let mut analysis =
            DependencyAnalyzer::analyze_with_options(Some(&manifest), request.options)?;

        // Step 3: Pull in properties from related manifests
        if request.search_properties {
            self.progress_reporter
                .report_progress(3, TOTAL_STEPS, Some("searching related POM files"));
            self.enrich_properties(&mut analysis);
        }
        let mut warnings = self.undefined_property_warnings(&analysis, request.search_properties);

        // Step 4: Plan the patches
        self.progress_reporter
            .report_progress(4, TOTAL_STEPS, Some("planning patches"));
        let plan = PatchStrategy::plan(&analysis, &request.patches);
        warnings.extend(plan.warnings.iter().cloned());

        self.report_summary(
            &analysis,
            plan.direct_patches.len(),
            plan.property_patches.len(),
            &warnings,
        );

        Ok(AnalyzeResponse::new(request.pom_path, analysis, plan, warnings))
    }

    fn read_manifest(&self, request: &AnalyzeRequest) -> Result<Manifest> {
        self.progress_reporter.report(&format!(
            "📖 Loading POM file from: {}",
            request.pom_path.display()
        ));
        self.progress_reporter
            .report_progress(1, TOTAL_STEPS, Some("reading POM"));

        let manifest = self.manifest_reader.read_manifest(&request.pom_path)?;

        tracing::debug!(
            dependencies = manifest.dependencies.len(),
            managed = manifest.dependency_management.len(),
            properties = manifest.properties.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    fn enrich_properties(&self, analysis: &mut AnalysisResult) {
        let Some(lookup) = self.property_lookup.as_ref() else {
            tracing::debug!("property search requested but no lookup is configured");
            return;
        };

        let added = analysis.add_missing_properties(lookup.tree_properties());
        tracing::debug!(added, "properties added from related manifests");
    }

    /// One warning per referenced property that no visible manifest defines
    fn undefined_property_warnings(
        &self,
        analysis: &AnalysisResult,
        search_properties: bool,
    ) -> Vec<String> {
        let mut resolver = PropertyResolver::new(&analysis.properties);
        if search_properties {
            if let Some(lookup) = self.property_lookup.as_ref() {
                resolver = resolver.with_lookup(lookup);
            }
        }
        analysis
            .undefined_properties()
            .into_iter()
            .filter(|name| resolver.resolve(name).is_none())
            .map(|name| format!("Property {} is referenced but not found in project", name))
            .collect()
    }

    fn report_summary(
        &self,
        analysis: &AnalysisResult,
        direct_patches: usize,
        property_patches: usize,
        warnings: &[String],
    ) {
        if !warnings.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "{} warning(s) raised, see the Warnings section of the report",
                warnings.len()
            ));
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Analyzed {} dependencies and {} BOM import(s): {} direct patch(es), {} property update(s)",
            analysis.dependencies.len(),
            analysis.boms.len(),
            direct_patches,
            property_patches
        ));
    }
}
