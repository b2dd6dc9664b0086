/// Filesystem adapters for file I/O operations
mod file_reader;
mod json_alert_store;
mod report_file_checker;
mod stdout_presenter;

pub use file_reader::FileSystemReader;
pub use json_alert_store::JsonFileAlertStore;
pub use report_file_checker::ReportFileChecker;
pub use stdout_presenter::StdoutPresenter;
