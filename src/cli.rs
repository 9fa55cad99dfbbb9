use clap::{Args, Parser, Subcommand};
use pombump::application::dto::OutputFormat;
use std::path::PathBuf;

/// Recommend direct, property or BOM version patches for Maven POM files
#[derive(Parser, Debug)]
#[command(name = "pombump")]
#[command(version)]
#[command(
    about = "Recommend direct, property or BOM version patches for Maven POM files",
    long_about = None
)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a POM file and plan the patches needed to reach the requested versions
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the POM file to analyze
    #[arg(value_name = "POM_FILE")]
    pub pom_file: PathBuf,

    /// Requested versions: whitespace-separated groupId@artifactId@version specs
    #[arg(long, value_name = "SPECS")]
    pub patches: Option<String>,

    /// YAML file listing requested versions (combined with --patches, file first)
    #[arg(long, value_name = "FILE")]
    pub patch_file: Option<PathBuf>,

    /// Report format: human, json or yaml
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Merge recommended dependency patches into this YAML file
    #[arg(long, value_name = "FILE")]
    pub output_deps: Option<PathBuf>,

    /// Merge recommended property updates into this YAML file
    #[arg(long, value_name = "FILE")]
    pub output_properties: Option<PathBuf>,

    /// Look up undefined properties in parent and sibling POM files
    #[arg(long)]
    pub search_properties: bool,

    /// Ignore ordinary <dependencyManagement> entries (BOM imports are still detected)
    #[arg(long)]
    pub no_dependency_management: bool,

    /// Write the report to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub report_file: Option<PathBuf>,

    /// Config file (defaults to pombump.config.yml next to the POM file)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
