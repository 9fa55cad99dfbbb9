/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the analyze use case and its results back out to
/// the formatters, keeping the domain layer isolated.
mod analyze_request;
mod analyze_response;
mod output_format;

pub use analyze_request::AnalyzeRequest;
pub use analyze_response::AnalyzeResponse;
pub use output_format::OutputFormat;
