use crate::alert_sync::domain::{AdvisoryReport, Manifest, SecurityAlert};
use crate::alert_sync::services::{AdvisoryReconciler, ReconcilePlan};
use crate::application::dto::{SyncRequest, SyncResponse};
use crate::ports::outbound::{AdvisoryChecker, AlertStore, ProgressReporter};
use crate::shared::error::SyncError;
use crate::shared::Result;
use chrono::Utc;

/// SyncSecurityAlertsUseCase - Core use case for alert synchronization
///
/// Fetches a fresh advisory report, reconciles it against the persisted
/// alerts, and applies the resulting plan inside one store transaction.
///
/// A checker failure stops the run before the store is read, so existing
/// alerts are never wiped because of a fetch error. A store failure rolls
/// back every change made by the run.
///
/// # Type Parameters
/// * `C` - AdvisoryChecker implementation
/// * `S` - AlertStore implementation
/// * `PR` - ProgressReporter implementation
pub struct SyncSecurityAlertsUseCase<C, S, PR> {
    checker: C,
    store: S,
    progress_reporter: PR,
}

impl<C, S, PR> SyncSecurityAlertsUseCase<C, S, PR>
where
    C: AdvisoryChecker,
    S: AlertStore,
    PR: ProgressReporter,
{
    /// Creates a new SyncSecurityAlertsUseCase with injected dependencies
    pub fn new(checker: C, store: S, progress_reporter: PR) -> Self {
        Self {
            checker,
            store,
            progress_reporter,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Executes one synchronization run
    ///
    /// # Errors
    /// * `SyncError::FetchFailure` if the checker produced no report
    /// * `SyncError::PersistenceFailure` if reading or writing the store failed
    pub async fn execute(&mut self, request: SyncRequest) -> Result<SyncResponse> {
        // Step 1: Fetch the advisory report
        let report = self.fetch_report(&request).await?;

        // Step 2: Load persisted alerts
        let existing = self
            .store
            .list_alerts()
            .map_err(|e| SyncError::persistence_failure("read", &e))?;

        // Step 3: Reconcile
        let synced_at = Utc::now();
        let plan = AdvisoryReconciler::reconcile(&report, &existing, synced_at);

        // Step 4: Apply the plan transactionally
        self.apply_plan(&plan)?;

        let active_alerts = existing.len() + plan.created_count() - plan.deleted_count();
        self.progress_reporter.report_completion(&format!(
            "✅ Security alerts synchronized: {} created, {} updated, {} deleted ({} active)",
            plan.created_count(),
            plan.updated_count(),
            plan.deleted_count(),
            active_alerts
        ));

        Ok(SyncResponse::new(
            plan,
            report.advisory_count(),
            report.affected_package_count(),
            active_alerts,
            synced_at,
        ))
    }

    /// Fetches the report, mapping any checker error to `FetchFailure`
    async fn fetch_report(&self, request: &SyncRequest) -> Result<AdvisoryReport> {
        self.progress_reporter.report(&format!(
            "🔍 Checking packages from manifest: {}",
            request.manifest_path.display()
        ));

        let manifest = Manifest::new(request.manifest_path.clone());
        let report = self
            .checker
            .check(&manifest)
            .await
            .map_err(|e| SyncError::fetch_failure(&e))?;

        if report.is_empty() {
            self.progress_reporter
                .report("✅ No advisories reported for installed packages");
        } else {
            self.progress_reporter.report(&format!(
                "⚠️  {} advisory(ies) reported across {} package(s)",
                report.advisory_count(),
                report.affected_package_count()
            ));
        }

        Ok(report)
    }

    /// Applies the plan inside a store transaction, rolling back on failure
    fn apply_plan(&mut self, plan: &ReconcilePlan) -> Result<()> {
        if plan.is_empty() {
            self.progress_reporter
                .report("📋 Security alerts are already up to date");
            return Ok(());
        }

        self.store
            .begin()
            .map_err(|e| SyncError::persistence_failure("begin a transaction for", &e))?;

        let outcome = self.write_changes(plan).and_then(|()| {
            self.store
                .commit()
                .map_err(|e| SyncError::persistence_failure("commit", &e).into())
        });

        if let Err(err) = outcome {
            if let Err(rollback_err) = self.store.rollback() {
                self.progress_reporter.report_error(&format!(
                    "❌ Rollback of security alert changes failed: {:#}",
                    rollback_err
                ));
            }
            return Err(err);
        }

        Ok(())
    }

    /// Issues the store operations of the plan: deletes, then updates, then creates
    fn write_changes(&mut self, plan: &ReconcilePlan) -> Result<()> {
        let total = plan.change_count();
        let mut done = 0;

        for alert in &plan.deleted {
            self.store
                .delete(alert)
                .map_err(|e| SyncError::persistence_failure("delete", &e))?;
            done += 1;
            self.report_step(done, total, "Deleted", alert);
        }

        for alert in &plan.updated {
            self.store
                .update(alert)
                .map_err(|e| SyncError::persistence_failure("update", &e))?;
            done += 1;
            self.report_step(done, total, "Updated", alert);
        }

        for alert in &plan.created {
            self.store
                .create(alert)
                .map_err(|e| SyncError::persistence_failure("create", &e))?;
            done += 1;
            self.report_step(done, total, "Created", alert);
        }

        Ok(())
    }

    fn report_step(&self, done: usize, total: usize, action: &str, alert: &SecurityAlert) {
        self.progress_reporter.report_progress(
            done,
            total,
            Some(&format!(
                "{} {} ({})",
                action,
                alert.identifier(),
                alert.package_name()
            )),
        );
    }
}
