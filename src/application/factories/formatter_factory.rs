use crate::adapters::outbound::formatters::{HumanFormatter, JsonFormatter, YamlFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Maps the application-level [`OutputFormat`] to a formatter adapter.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the formatter for `format`
    ///
    /// # Examples
    /// ```
    /// use pombump::application::dto::OutputFormat;
    /// use pombump::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Human => Box::new(HumanFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Yaml => Box::new(YamlFormatter::new()),
        }
    }

    /// Status line shown while rendering
    ///
    /// # Examples
    /// ```
    /// use pombump::application::dto::OutputFormat;
    /// use pombump::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Yaml);
    /// assert_eq!(message, "📝 Rendering YAML report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Human => "📝 Rendering report...",
            OutputFormat::Json => "📝 Rendering JSON report...",
            OutputFormat::Yaml => "📝 Rendering YAML report...",
        }
    }
}
