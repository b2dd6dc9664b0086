use crate::alert_sync::domain::{AdvisoryReport, Manifest};
use crate::shared::Result;
use async_trait::async_trait;

/// AdvisoryChecker port for fetching advisory reports
///
/// This port abstracts the external vulnerability-advisory service that
/// checks a manifest of installed packages and reports their advisories.
///
/// # Async Support
/// Checking usually involves network I/O, so the method is async.
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait AdvisoryChecker: Send + Sync {
    /// Checks the packages listed in `manifest` against the advisory service
    ///
    /// # Returns
    /// The advisory report. An empty report means no package has advisories.
    ///
    /// # Errors
    /// Returns an error if no report could be produced at all (network error,
    /// error status, malformed response). Callers must then leave existing
    /// alerts untouched.
    async fn check(&self, manifest: &Manifest) -> Result<AdvisoryReport>;
}
