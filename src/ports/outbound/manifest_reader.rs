use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading the installed-packages manifest
///
/// This port abstracts the file system operations needed to read
/// a manifest such as `composer.lock` before sending it to a checker.
pub trait ManifestReader {
    /// Reads the manifest at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The path is a symbolic link or not a regular file
    /// - The file cannot be read due to permissions or I/O errors
    fn read_manifest(&self, path: &Path) -> Result<String>;
}
