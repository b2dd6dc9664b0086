use crate::alert_sync::domain::SecurityAlert;
use crate::ports::outbound::AlertStore;
use crate::shared::Result;

/// ListSecurityAlertsUseCase - Reads the currently persisted alerts
///
/// Alerts are returned sorted by package name, then identifier, then
/// advisory key, optionally restricted to a single package.
pub struct ListSecurityAlertsUseCase<S> {
    store: S,
}

impl<S: AlertStore> ListSecurityAlertsUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists persisted alerts
    ///
    /// # Arguments
    /// * `package_name` - When set, only alerts for this package are returned
    pub fn execute(&self, package_name: Option<&str>) -> Result<Vec<SecurityAlert>> {
        let mut alerts = match package_name {
            Some(name) => self.store.alerts_for_package(name)?,
            None => self.store.list_alerts()?,
        };

        alerts.sort_by(|a, b| {
            a.package_name()
                .cmp(b.package_name())
                .then_with(|| a.identifier().cmp(b.identifier()))
                .then_with(|| a.advisory_key().cmp(b.advisory_key()))
        });

        Ok(alerts)
    }
}
