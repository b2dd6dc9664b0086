/// Formatter adapters for the supported output formats
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonSummaryFormatter;
pub use text_formatter::TextSummaryFormatter;
