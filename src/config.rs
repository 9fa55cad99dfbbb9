//! Configuration file support for pombump.
//!
//! Provides YAML-based configuration through `pombump.config.yml` files,
//! including data structures, file loading, validation and merging with the
//! command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::AnalyzeArgs;
use pombump::application::dto::OutputFormat;
use pombump::shared::error::PomBumpError;
use pombump::shared::Result;

pub const CONFIG_FILENAME: &str = "pombump.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<String>,
    pub search_properties: Option<bool>,
    pub include_dependency_management: Option<bool>,
    pub output_deps: Option<PathBuf>,
    pub output_properties: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings for one `analyze` run: CLI flags layered over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeSettings {
    pub output: OutputFormat,
    pub search_properties: bool,
    pub include_dependency_management: bool,
    pub output_deps: Option<PathBuf>,
    pub output_properties: Option<PathBuf>,
}

impl AnalyzeSettings {
    /// Merges CLI flags with an optional config file. Flags given on the command
    /// line win; boolean switches can only turn behavior on (or, for
    /// `--no-dependency-management`, off).
    pub fn resolve(args: &AnalyzeArgs, config: Option<&ConfigFile>) -> Result<Self> {
        let config_output = match config.and_then(|c| c.output.as_deref()) {
            Some(value) => Some(parse_output(value)?),
            None => None,
        };

        Ok(Self {
            output: args.output.or(config_output).unwrap_or_default(),
            search_properties: args.search_properties
                || config.and_then(|c| c.search_properties).unwrap_or(false),
            include_dependency_management: !args.no_dependency_management
                && config
                    .and_then(|c| c.include_dependency_management)
                    .unwrap_or(true),
            output_deps: args
                .output_deps
                .clone()
                .or_else(|| config.and_then(|c| c.output_deps.clone())),
            output_properties: args
                .output_properties
                .clone()
                .or_else(|| config.and_then(|c| c.output_properties.clone())),
        })
    }
}

/// Loads the config named by `--config`, or discovers one next to the POM file.
pub fn load_for(args: &AnalyzeArgs) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let dir = match args.pom_file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            discover_config(dir)
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "config file loaded");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn parse_output(value: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(value).map_err(|_| {
        PomBumpError::Validation {
            message: format!(
                "Invalid config: output '{}' is not supported.\n\n\
                 💡 Hint: Use one of 'human', 'json' or 'yaml'.",
                value
            ),
        }
        .into()
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(output) = config.output.as_deref() {
        parse_output(output)?;
    }

    for (key, path) in [
        ("output_deps", &config.output_deps),
        ("output_properties", &config.output_properties),
    ] {
        if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(PomBumpError::Validation {
                message: format!("Invalid config: {} must not be empty.", key),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
