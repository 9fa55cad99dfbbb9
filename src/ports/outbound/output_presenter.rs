use crate::shared::Result;

/// OutputPresenter port for delivering the rendered report
///
/// Implementations write to stdout or to a report file.
pub trait OutputPresenter {
    /// Writes the rendered report to its destination
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
