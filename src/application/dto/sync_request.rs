use std::path::PathBuf;

/// SyncRequest - Internal request DTO for the alert synchronization use case
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// Path to the manifest listing installed packages (e.g. composer.lock)
    pub manifest_path: PathBuf,
}

impl SyncRequest {
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }
}
