use crate::alert_sync::domain::{
    AdvisoryReport, AlertFields, AlertKey, ReportedAdvisory, SecurityAlert,
};
use crate::alert_sync::policies::IdentifierPolicy;
use chrono::{DateTime, Utc};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// The changes needed to make persisted alerts match a report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub created: Vec<SecurityAlert>,
    pub updated: Vec<SecurityAlert>,
    pub deleted: Vec<SecurityAlert>,
}

impl ReconcilePlan {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    /// Total number of store operations the plan requires
    pub fn change_count(&self) -> usize {
        self.created.len() + self.updated.len() + self.deleted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.change_count() == 0
    }
}

/// AdvisoryReconciler - diffs a report against persisted alerts
///
/// Alerts are matched on (package name, advisory key). Reported advisories
/// without a match are created, matched alerts whose content changed are
/// updated in place, and unmatched alerts are deleted. Running the plan and
/// reconciling again with the same report yields an empty plan.
pub struct AdvisoryReconciler;

impl AdvisoryReconciler {
    /// Computes the plan for `report` against the `existing` alerts
    ///
    /// # Arguments
    /// * `report` - Freshly fetched advisory report; empty means "all clear"
    /// * `existing` - Every currently persisted alert
    /// * `now` - Timestamp stamped on created and updated alerts
    pub fn reconcile(
        report: &AdvisoryReport,
        existing: &[SecurityAlert],
        now: DateTime<Utc>,
    ) -> ReconcilePlan {
        let mut plan = ReconcilePlan::default();

        // Only the first row per key can match; any further rows with the same key are duplicates.
        let mut unmatched: HashMap<AlertKey, &SecurityAlert> = HashMap::new();
        for alert in existing {
            match unmatched.entry(alert.key()) {
                Entry::Vacant(slot) => {
                    slot.insert(alert);
                }
                Entry::Occupied(_) => plan.deleted.push(alert.clone()),
            }
        }

        for reported in report.advisories() {
            let fields = Self::fields_for(&reported);

            match unmatched.remove(&fields.key()) {
                None => plan.created.push(SecurityAlert::create(fields, now)),
                Some(alert) if alert.differs_from(&fields) => {
                    plan.updated.push(alert.updated_with(fields, now))
                }
                Some(_) => {}
            }
        }

        plan.deleted.extend(
            existing
                .iter()
                .filter(|alert| {
                    unmatched
                        .get(&alert.key())
                        .is_some_and(|stale| stale.id() == alert.id())
                })
                .cloned(),
        );

        plan
    }

    /// Builds the alert content for one reported advisory
    pub fn fields_for(reported: &ReportedAdvisory<'_>) -> AlertFields {
        let advisory = reported.advisory;
        AlertFields {
            package_name: reported.package_name.to_string(),
            package_version: reported.version.to_string(),
            identifier: IdentifierPolicy::resolve(
                advisory.cve(),
                advisory.title(),
                reported.advisory_key,
            ),
            title: advisory.title().to_string(),
            link: advisory.link().to_string(),
            advisory_key: reported.advisory_key.to_string(),
        }
    }
}
