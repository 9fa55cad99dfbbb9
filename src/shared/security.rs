use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any file pombump reads (100 MB).
/// Real POM files are a few hundred kilobytes at most.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads a text file after checking that it is a regular file (not a symlink,
/// not a directory) and that it does not exceed [`MAX_FILE_SIZE`].
///
/// # Arguments
/// * `path` - File to read
/// * `file_description` - Human readable name used in error messages (e.g. "POM file")
///
/// # Errors
/// Returns an error if the metadata cannot be read, the path is a symlink or not a
/// regular file, the file is too large, or the content is not valid UTF-8.
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_FILE_SIZE
        );
    }

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Refuses to write through a symbolic link.
///
/// Non-existent targets are accepted; the caller creates them.
pub fn ensure_not_symlink_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
            path.display()
        ),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(anyhow::anyhow!(
            "Failed to read metadata for {}: {}",
            path.display(),
            e
        )),
    }
}
