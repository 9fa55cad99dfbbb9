use crate::shared::error::PomBumpError;

/// Output format of the analysis report
///
/// Shared by the CLI, the config file and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text summary for terminals (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// YAML, also accepted as `yml`
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = PomBumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(PomBumpError::UnsupportedOutputFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
