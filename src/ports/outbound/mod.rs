/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// The analysis core reaches the file system, the console and the renderers
/// only through these traits.
pub mod formatter;
pub mod manifest_reader;
pub mod output_presenter;
pub mod patch_file_store;
pub mod progress_reporter;
pub mod property_lookup;

pub use formatter::ReportFormatter;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use patch_file_store::PatchFileStore;
pub use progress_reporter::ProgressReporter;
pub use property_lookup::PropertyLookup;
