/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (advisory service, alert storage,
/// file system, console).
pub mod advisory_checker;
pub mod alert_store;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod summary_formatter;

pub use advisory_checker::AdvisoryChecker;
pub use alert_store::AlertStore;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use summary_formatter::SummaryFormatter;
