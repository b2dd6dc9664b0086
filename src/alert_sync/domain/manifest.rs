use std::path::{Path, PathBuf};

/// Manifest value object identifying the installed packages to check
///
/// The manifest (e.g. a `composer.lock`) is opaque to the domain; only the
/// checker adapters look inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
