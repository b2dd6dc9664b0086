use crate::alert_sync::services::ReconcilePlan;
use chrono::{DateTime, Utc};

/// SyncResponse - Result of one synchronization run
///
/// Carries the applied plan so that callers can log or render exactly
/// which alerts were created, updated and deleted.
#[derive(Debug, Clone)]
pub struct SyncResponse {
    /// Changes applied to the alert store
    pub plan: ReconcilePlan,
    /// Number of advisories in the fetched report
    pub reported_advisories: usize,
    /// Number of packages with at least one advisory in the fetched report
    pub affected_packages: usize,
    /// Number of alerts persisted after the run
    pub active_alerts: usize,
    /// When the run applied its changes
    pub synced_at: DateTime<Utc>,
}

impl SyncResponse {
    pub fn new(
        plan: ReconcilePlan,
        reported_advisories: usize,
        affected_packages: usize,
        active_alerts: usize,
        synced_at: DateTime<Utc>,
    ) -> Self {
        Self {
            plan,
            reported_advisories,
            affected_packages,
            active_alerts,
            synced_at,
        }
    }

    pub fn has_active_alerts(&self) -> bool {
        self.active_alerts > 0
    }
}
