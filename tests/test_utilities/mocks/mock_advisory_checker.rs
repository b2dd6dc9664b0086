use security_alert_sync::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock AdvisoryChecker for testing
///
/// Clones share the same state, so a test can keep a handle and swap the
/// next response while the use case owns the checker.
#[derive(Clone, Default)]
pub struct MockAdvisoryChecker {
    response: Arc<Mutex<Option<AdvisoryReport>>>,
    calls: Arc<AtomicUsize>,
}

impl MockAdvisoryChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(report: AdvisoryReport) -> Self {
        let checker = Self::new();
        checker.respond_with(report);
        checker
    }

    pub fn with_json(json: &str) -> Self {
        Self::with_report(AdvisoryReport::from_json(json).unwrap())
    }

    /// A checker whose every call fails
    pub fn with_failure() -> Self {
        Self::new()
    }

    pub fn respond_with(&self, report: AdvisoryReport) {
        *self.response.lock().unwrap() = Some(report);
    }

    pub fn fail(&self) {
        *self.response.lock().unwrap() = None;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AdvisoryChecker for MockAdvisoryChecker {
    async fn check(&self, _manifest: &Manifest) -> Result<AdvisoryReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.response.lock().unwrap().clone() {
            Some(report) => Ok(report),
            None => anyhow::bail!("Mock advisory service unavailable"),
        }
    }
}
