use crate::ports::outbound::ManifestReader;
use crate::shared::error::SyncError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading manifests from the file system
///
/// This adapter implements the ManifestReader port. Reads reject symbolic
/// links and non-regular files and enforce a size limit.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(SyncError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: "Run in the project root next to composer.lock, or specify the manifest with the --manifest option.".to_string(),
            }
            .into());
        }

        read_regular_file(path, "manifest").map_err(|e| {
            SyncError::ManifestReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_manifest_success() {
        let temp_dir = TempDir::new().unwrap();
        let manifest_path = temp_dir.path().join("composer.lock");
        fs::write(&manifest_path, "{\"packages\": []}").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_manifest(&manifest_path).unwrap();

        assert_eq!(content, "{\"packages\": []}");
    }

    #[test]
    fn test_read_manifest_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_manifest(&temp_dir.path().join("composer.lock"));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Manifest file not found"));
        assert!(err_string.contains("--manifest"));
    }

    #[test]
    fn test_read_manifest_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_manifest(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read manifest file"));
        assert!(err_string.contains("not a regular file"));
    }
}
