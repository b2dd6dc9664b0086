use crate::alert_sync::domain::SecurityAlert;
use crate::ports::outbound::AlertStore;
use crate::shared::error::SyncError;
use crate::shared::security::{read_regular_file, validate_not_symlink};
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// On-disk layout of the store file
#[derive(Debug, Default, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    alerts: Vec<SecurityAlert>,
}

#[derive(Serialize)]
struct StoreDocumentRef<'a> {
    alerts: &'a [SecurityAlert],
}

/// JsonFileAlertStore adapter persisting security alerts in a JSON file
///
/// This adapter implements the AlertStore port. The whole table is held in
/// memory and written back with an atomic replace (temp file in the same
/// directory, then rename), so readers never observe a half-written file.
///
/// Outside a transaction every mutation is written immediately. Between
/// `begin` and `commit` mutations stay in memory and `commit` writes them
/// in one replace; `rollback` restores the state captured by `begin`.
pub struct JsonFileAlertStore {
    path: PathBuf,
    alerts: Vec<SecurityAlert>,
    snapshot: Option<Vec<SecurityAlert>>,
}

impl JsonFileAlertStore {
    /// Opens the store at `path`; a missing file is an empty store
    ///
    /// # Errors
    /// Returns an error if the file exists but is a symlink, is not a
    /// regular file, is too large, or does not contain a valid store document.
    pub fn open(path: PathBuf) -> Result<Self> {
        let alerts = if path.exists() {
            Self::load(&path)?
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            alerts,
            snapshot: None,
        })
    }

    fn load(path: &Path) -> Result<Vec<SecurityAlert>> {
        let content =
            read_regular_file(path, "alert store").map_err(|e| SyncError::StoreReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document: StoreDocument =
            serde_json::from_str(&content).map_err(|e| SyncError::StoreReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(document.alerts)
    }

    fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Writes the current in-memory table to disk atomically
    fn flush(&self) -> Result<()> {
        self.write_document().map_err(|e| {
            SyncError::StoreWriteError {
                path: self.path.clone(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }

    fn write_document(&self) -> Result<()> {
        if self.path.exists() {
            validate_not_symlink(&self.path, "write")?;
        }

        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(directory)?;
        serde_json::to_writer_pretty(
            &mut temp_file,
            &StoreDocumentRef {
                alerts: &self.alerts,
            },
        )?;
        temp_file.write_all(b"\n")?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }

    /// Applies `change` to the table, writing it out unless a transaction is open
    fn mutate<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<SecurityAlert>) -> Result<()>,
    {
        if self.in_transaction() {
            return change(&mut self.alerts);
        }

        let before = self.alerts.clone();
        change(&mut self.alerts)?;
        if let Err(e) = self.flush() {
            self.alerts = before;
            return Err(e);
        }
        Ok(())
    }
}

impl AlertStore for JsonFileAlertStore {
    fn list_alerts(&self) -> Result<Vec<SecurityAlert>> {
        Ok(self.alerts.clone())
    }

    fn create(&mut self, alert: &SecurityAlert) -> Result<()> {
        self.mutate(|alerts| {
            let key = alert.key();
            if alerts.iter().any(|existing| existing.key() == key) {
                anyhow::bail!("Security alert already exists for {}", key);
            }
            alerts.push(alert.clone());
            Ok(())
        })
    }

    fn update(&mut self, alert: &SecurityAlert) -> Result<()> {
        self.mutate(|alerts| {
            let row = alerts
                .iter_mut()
                .find(|existing| existing.id() == alert.id())
                .ok_or_else(|| anyhow::anyhow!("Security alert {} not found", alert.id()))?;
            *row = alert.clone();
            Ok(())
        })
    }

    fn delete(&mut self, alert: &SecurityAlert) -> Result<()> {
        self.mutate(|alerts| {
            let position = alerts
                .iter()
                .position(|existing| existing.id() == alert.id())
                .ok_or_else(|| anyhow::anyhow!("Security alert {} not found", alert.id()))?;
            alerts.remove(position);
            Ok(())
        })
    }

    fn begin(&mut self) -> Result<()> {
        if self.in_transaction() {
            anyhow::bail!("A transaction is already in progress");
        }
        self.snapshot = Some(self.alerts.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        if !self.in_transaction() {
            anyhow::bail!("No transaction in progress");
        }
        self.flush()?;
        self.snapshot = None;
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        if let Some(snapshot) = self.snapshot.take() {
            self.alerts = snapshot;
        }
        Ok(())
    }
}
