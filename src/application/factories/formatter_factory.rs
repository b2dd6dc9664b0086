use crate::adapters::outbound::formatters::{JsonSummaryFormatter, TextSummaryFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SummaryFormatter;

/// Factory for creating summary formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use security_alert_sync::application::dto::OutputFormat;
    /// use security_alert_sync::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// let output = formatter.format_alerts(&[]).unwrap();
    /// assert!(output.contains("\"count\": 0"));
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SummaryFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextSummaryFormatter::new()),
            OutputFormat::Json => Box::new(JsonSummaryFormatter::new()),
        }
    }
}
