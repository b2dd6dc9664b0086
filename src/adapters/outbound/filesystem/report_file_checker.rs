use crate::alert_sync::domain::{AdvisoryReport, Manifest};
use crate::ports::outbound::AdvisoryChecker;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

/// ReportFileChecker adapter serving a previously saved advisory report
///
/// This adapter implements the AdvisoryChecker port for offline runs: the
/// report JSON was produced elsewhere (for example by a CI job with network
/// access) and is read from disk. The manifest is not consulted.
pub struct ReportFileChecker {
    report_path: PathBuf,
}

impl ReportFileChecker {
    pub fn new(report_path: PathBuf) -> Self {
        Self { report_path }
    }
}

#[async_trait]
impl AdvisoryChecker for ReportFileChecker {
    async fn check(&self, _manifest: &Manifest) -> Result<AdvisoryReport> {
        let content = read_regular_file(&self.report_path, "advisory report")?;
        AdvisoryReport::from_json(&content).with_context(|| {
            format!(
                "Failed to parse advisory report: {}",
                self.report_path.display()
            )
        })
    }
}
