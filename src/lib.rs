//! security-alert-sync - keeps package security alerts in step with an advisory service
//!
//! This library fetches a vulnerability report for the installed packages of a
//! project, reconciles it against previously persisted security alerts, and
//! applies the resulting creates, updates and deletes in one transaction.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`alert_sync`): Advisory report, alert records, identifier policy and reconciliation
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use security_alert_sync::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let checker = ReportFileChecker::new(PathBuf::from("report.json"));
//! let store = JsonFileAlertStore::open(PathBuf::from("security-alerts.json"))?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let mut use_case = SyncSecurityAlertsUseCase::new(checker, store, progress_reporter);
//!
//! // Execute
//! let request = SyncRequest::new(PathBuf::from("composer.lock"));
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = TextSummaryFormatter::new();
//! println!("{}", formatter.format_sync(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod alert_sync;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, JsonFileAlertStore, ReportFileChecker, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonSummaryFormatter, TextSummaryFormatter};
    pub use crate::adapters::outbound::network::HttpAdvisoryChecker;
    pub use crate::alert_sync::domain::{
        Advisory, AdvisoryReport, AlertFields, AlertKey, Manifest, PackageReport,
        ReportedAdvisory, SecurityAlert,
    };
    pub use crate::alert_sync::policies::IdentifierPolicy;
    pub use crate::alert_sync::services::{AdvisoryReconciler, ReconcilePlan};
    pub use crate::application::dto::{OutputFormat, SyncRequest, SyncResponse};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::{
        ListSecurityAlertsUseCase, SyncSecurityAlertsUseCase,
    };
    pub use crate::ports::outbound::{
        AdvisoryChecker, AlertStore, ManifestReader, OutputPresenter, ProgressReporter,
        SummaryFormatter,
    };
    pub use crate::shared::error::{ExitCode, SyncError};
    pub use crate::shared::Result;
}
