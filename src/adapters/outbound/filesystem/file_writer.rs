use crate::ports::outbound::OutputPresenter;
use crate::shared::error::PomBumpError;
use crate::shared::security::ensure_not_symlink_target;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes `content` to `path` after the output checks every writer shares:
/// the parent directory must exist and the target must not be a symlink.
pub(crate) fn write_text_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(PomBumpError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    ensure_not_symlink_target(path).map_err(|e| PomBumpError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    fs::write(path, content).map_err(|e| PomBumpError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    Ok(())
}

/// FileSystemWriter adapter for `--report-file`
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        write_text_file(&self.output_path, content)?;
        eprintln!("✅ Report written to {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter, the default report destination
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))
    }
}
