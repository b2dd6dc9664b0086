use crate::alert_sync::domain::SecurityAlert;
use crate::application::dto::SyncResponse;
use crate::shared::Result;

/// SummaryFormatter port for rendering command output
///
/// Implementations render the result of a synchronization run, or a
/// listing of persisted alerts, in a specific output format.
pub trait SummaryFormatter {
    /// Formats the outcome of a synchronization run
    fn format_sync(&self, response: &SyncResponse) -> Result<String>;

    /// Formats a listing of persisted alerts
    fn format_alerts(&self, alerts: &[SecurityAlert]) -> Result<String>;
}
