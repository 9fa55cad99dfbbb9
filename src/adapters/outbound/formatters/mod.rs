/// Formatter adapters for the analysis report output modes
mod human_formatter;
mod json_formatter;
mod yaml_formatter;

pub use human_formatter::HumanFormatter;
pub use json_formatter::JsonFormatter;
pub use yaml_formatter::YamlFormatter;
