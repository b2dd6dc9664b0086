use crate::alert_sync::domain::SecurityAlert;
use crate::application::dto::SyncResponse;
use crate::ports::outbound::SummaryFormatter;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct SyncDocument<'a> {
    synced_at: DateTime<Utc>,
    reported_advisories: usize,
    affected_packages: usize,
    active_alerts: usize,
    created: &'a [SecurityAlert],
    updated: &'a [SecurityAlert],
    deleted: &'a [SecurityAlert],
}

#[derive(Serialize)]
struct AlertListDocument<'a> {
    count: usize,
    alerts: &'a [SecurityAlert],
}

/// JsonSummaryFormatter adapter rendering machine-readable output
pub struct JsonSummaryFormatter;

impl JsonSummaryFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonSummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for JsonSummaryFormatter {
    fn format_sync(&self, response: &SyncResponse) -> Result<String> {
        let document = SyncDocument {
            synced_at: response.synced_at,
            reported_advisories: response.reported_advisories,
            affected_packages: response.affected_packages,
            active_alerts: response.active_alerts,
            created: &response.plan.created,
            updated: &response.plan.updated,
            deleted: &response.plan.deleted,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn format_alerts(&self, alerts: &[SecurityAlert]) -> Result<String> {
        let document = AlertListDocument {
            count: alerts.len(),
            alerts,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
