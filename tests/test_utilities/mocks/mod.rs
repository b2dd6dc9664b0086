/// Mock implementations for testing
mod in_memory_alert_store;
mod mock_advisory_checker;
mod mock_progress_reporter;

pub use in_memory_alert_store::{FailingOperation, InMemoryAlertStore};
pub use mock_advisory_checker::MockAdvisoryChecker;
pub use mock_progress_reporter::MockProgressReporter;
