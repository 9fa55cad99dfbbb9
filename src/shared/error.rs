use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// `1` is deliberately unused so scripts can tell clap usage errors and
/// application failures apart from generic shell failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Analysis completed (conflicts are recommendations, not failures)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable POM, invalid patch, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for POM analysis.
///
/// Only fatal conditions live here. Missing properties, malformed references and
/// version conflicts are absorbed into the analysis and reported as warnings.
#[derive(Debug, Error)]
pub enum PomBumpError {
    #[error("project is nil: no manifest was supplied to the analyzer")]
    ProjectIsNil,

    #[error("POM file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("failed to parse POM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is well-formed XML")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("invalid patch '{spec}': {reason}\n\n💡 Hint: Patches use the form groupId@artifactId@version")]
    InvalidPatch { spec: String, reason: String },

    #[error("unsupported output format: {format}")]
    UnsupportedOutputFormat { format: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values and requests
    #[error("Validation error: {message}")]
    Validation { message: String },
}
