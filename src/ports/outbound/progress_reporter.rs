/// ProgressReporter port for user-facing status messages
///
/// Messages go to the user while the report itself goes to the OutputPresenter,
/// so the two never interleave on stdout.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress through a bounded amount of work
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Items expected
    /// * `message` - Optional detail, e.g. the file being scanned
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem
    fn report_warning(&self, message: &str);

    /// Reports that the work finished
    fn report_completion(&self, message: &str);
}
