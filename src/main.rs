mod cli;
mod config;

use cli::{AnalyzeArgs, Cli, Command};
use config::AnalyzeSettings;
use owo_colors::OwoColorize;
use pombump::adapters::outbound::console::StderrProgressReporter;
use pombump::adapters::outbound::filesystem::{
    FileSystemReader, TreePropertySearch, YamlPatchFileStore,
};
use pombump::application::dto::{AnalyzeRequest, AnalyzeResponse};
use pombump::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pombump::application::read_models::AnalysisReportBuilder;
use pombump::application::use_cases::AnalyzeManifestUseCase;
use pombump::pom_analysis::domain::{parse_patch_specs, Patch};
use pombump::pom_analysis::services::AnalyzeOptions;
use pombump::ports::outbound::PatchFileStore;
use pombump::shared::error::ExitCode;
use pombump::shared::Result;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here and are not failures
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\n{} {}", "Caused by:".yellow(), err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr: `warn` by default, `debug` with `--verbose`,
/// and `RUST_LOG` when it is set.
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let config = config::load_for(&args)?;
    let settings = AnalyzeSettings::resolve(&args, config.as_ref())?;
    tracing::debug!(?settings, "effective settings");

    // Create adapters (Dependency Injection)
    let patch_store = YamlPatchFileStore::new();
    let patches = collect_patches(&args, &patch_store)?;
    let property_lookup = TreePropertySearch::new(FileSystemReader::new(), args.pom_file.clone());
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = AnalyzeManifestUseCase::new(
        FileSystemReader::new(),
        progress_reporter,
        Some(property_lookup),
    );

    let request = AnalyzeRequest::new(args.pom_file.clone(), patches)
        .with_options(AnalyzeOptions {
            include_dependency_management: settings.include_dependency_management,
        })
        .with_property_search(settings.search_properties);

    // Execute use case
    let response = use_case.execute(request)?;

    write_patch_files(&patch_store, &response, &settings)?;

    // Render and present the report
    eprintln!("{}", FormatterFactory::progress_message(settings.output));
    let report = AnalysisReportBuilder::build(&response);
    let formatted_output = FormatterFactory::create(settings.output).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.report_file));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Patches from `--patch-file` first, then from `--patches`
fn collect_patches(args: &AnalyzeArgs, store: &impl PatchFileStore) -> Result<Vec<Patch>> {
    let mut patches = Vec::new();
    if let Some(path) = &args.patch_file {
        patches.extend(store.read_patches(path)?);
    }
    if let Some(specs) = &args.patches {
        patches.extend(parse_patch_specs(specs)?);
    }
    tracing::debug!(count = patches.len(), "requested patches");
    Ok(patches)
}

fn write_patch_files(
    store: &impl PatchFileStore,
    response: &AnalyzeResponse,
    settings: &AnalyzeSettings,
) -> Result<()> {
    if let Some(path) = &settings.output_deps {
        let written = store.merge_dependency_patches(path, &response.plan.direct_patches)?;
        if written > 0 {
            eprintln!(
                "✅ Dependency patches written to {} ({} entries)",
                path.display(),
                written
            );
        }
    }

    if let Some(path) = &settings.output_properties {
        let written = store.merge_property_patches(path, &response.plan.property_patches)?;
        if written > 0 {
            eprintln!(
                "✅ Property updates written to {} ({} entries)",
                path.display(),
                written
            );
        }
    }

    Ok(())
}
