use security_alert_sync::prelude::*;

/// Store operation that the mock store can be told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingOperation {
    List,
    Create,
    Update,
    Delete,
    Commit,
}

/// Transactional in-memory AlertStore for testing
#[derive(Default)]
pub struct InMemoryAlertStore {
    alerts: Vec<SecurityAlert>,
    snapshot: Option<Vec<SecurityAlert>>,
    failing: Option<FailingOperation>,
    pub commits: usize,
    pub rollbacks: usize,
}

impl InMemoryAlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alerts(alerts: Vec<SecurityAlert>) -> Self {
        Self {
            alerts,
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, operation: FailingOperation) -> Self {
        self.failing = Some(operation);
        self
    }

    pub fn alerts(&self) -> &[SecurityAlert] {
        &self.alerts
    }

    pub fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }

    fn check(&self, operation: FailingOperation) -> Result<()> {
        if self.failing == Some(operation) {
            anyhow::bail!("Simulated {:?} failure", operation);
        }
        Ok(())
    }

    fn position(&self, alert: &SecurityAlert) -> Result<usize> {
        self.alerts
            .iter()
            .position(|stored| stored.id() == alert.id())
            .ok_or_else(|| anyhow::anyhow!("Security alert {} not found", alert.id()))
    }
}

impl AlertStore for InMemoryAlertStore {
    fn list_alerts(&self) -> Result<Vec<SecurityAlert>> {
        self.check(FailingOperation::List)?;
        Ok(self.alerts.clone())
    }

    fn create(&mut self, alert: &SecurityAlert) -> Result<()> {
        self.check(FailingOperation::Create)?;
        if self.alerts.iter().any(|stored| stored.key() == alert.key()) {
            anyhow::bail!("Security alert {} already exists", alert.key());
        }
        self.alerts.push(alert.clone());
        Ok(())
    }

    fn update(&mut self, alert: &SecurityAlert) -> Result<()> {
        self.check(FailingOperation::Update)?;
        let index = self.position(alert)?;
        self.alerts[index] = alert.clone();
        Ok(())
    }

    fn delete(&mut self, alert: &SecurityAlert) -> Result<()> {
        self.check(FailingOperation::Delete)?;
        let index = self.position(alert)?;
        self.alerts.remove(index);
        Ok(())
    }

    fn begin(&mut self) -> Result<()> {
        self.snapshot = Some(self.alerts.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.check(FailingOperation::Commit)?;
        self.snapshot = None;
        self.commits += 1;
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        if let Some(snapshot) = self.snapshot.take() {
            self.alerts = snapshot;
        }
        self.rollbacks += 1;
        Ok(())
    }
}
