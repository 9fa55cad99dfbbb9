use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where the rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for PresenterType {
    fn from(report_file: Option<PathBuf>) -> Self {
        report_file.map_or(PresenterType::Stdout, PresenterType::File)
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates the presenter for `presenter_type`
    ///
    /// # Examples
    /// ```
    /// use pombump::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
