use crate::alert_sync::domain::SecurityAlert;
use crate::shared::Result;

/// AlertStore port for durable security alert records
///
/// This port abstracts the storage engine holding `SecurityAlert` rows.
/// Records are unique on their `AlertKey` (package name, advisory key);
/// `update` and `delete` address a record by its id.
///
/// # Transactions
/// Stores that support transactions override `begin`, `commit` and
/// `rollback` so that all operations between `begin` and `commit` apply
/// together or not at all. The default implementations are no-ops, for
/// stores where every operation is applied immediately.
pub trait AlertStore {
    /// Returns every persisted alert
    fn list_alerts(&self) -> Result<Vec<SecurityAlert>>;

    /// Inserts a new alert
    ///
    /// # Errors
    /// Returns an error if an alert with the same key already exists,
    /// or if the write fails.
    fn create(&mut self, alert: &SecurityAlert) -> Result<()>;

    /// Replaces the stored alert having the same id
    ///
    /// # Errors
    /// Returns an error if no alert with that id exists, or if the write fails.
    fn update(&mut self, alert: &SecurityAlert) -> Result<()>;

    /// Removes the stored alert having the same id
    ///
    /// # Errors
    /// Returns an error if no alert with that id exists, or if the write fails.
    fn delete(&mut self, alert: &SecurityAlert) -> Result<()>;

    /// Starts a transaction
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    /// Makes all changes since `begin` durable
    fn commit(&mut self) -> Result<()> {
        Ok(())
    }

    /// Discards all changes since `begin`
    fn rollback(&mut self) -> Result<()> {
        Ok(())
    }

    /// Returns the persisted alerts for a single package
    fn alerts_for_package(&self, package_name: &str) -> Result<Vec<SecurityAlert>> {
        Ok(self
            .list_alerts()?
            .into_iter()
            .filter(|alert| alert.package_name() == package_name)
            .collect())
    }
}
