use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow schedulers and CI systems to distinguish between
/// different types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - synchronization completed (or no alerts when `--fail-on-alerts` is set)
    Success = 0,
    /// Active security alerts remain after synchronization (`--fail-on-alerts` only)
    AlertsPresent = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (fetch failure, persistence failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AlertsPresent => write!(f, "Alerts Present (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for security alert synchronization.
///
/// `FetchFailure` and `PersistenceFailure` are the two conditions the
/// synchronization run itself can raise; the remaining variants cover
/// file access and configuration around it.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The advisory checker could not produce a report. The alert store is left untouched.
    #[error("Failed to fetch advisory report\nDetails: {details}\n\n💡 Hint: Existing security alerts were left unchanged. Check connectivity to the advisory service and retry")]
    FetchFailure { details: String },

    /// A store operation failed during a run. Changes of the run were rolled back.
    #[error("Failed to {operation} security alerts\nDetails: {details}\n\n💡 Hint: No changes from this run were kept")]
    PersistenceFailure { operation: String, details: String },

    #[error("Manifest file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read manifest file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ManifestReadError { path: PathBuf, details: String },

    #[error("Failed to read alert store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the store file contains valid JSON written by security-alert-sync")]
    StoreReadError { path: PathBuf, details: String },

    #[error("Failed to write alert store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    StoreWriteError { path: PathBuf, details: String },

    #[error("Invalid config: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl SyncError {
    /// Wraps an upstream checker error as a `FetchFailure`, keeping its context chain.
    pub fn fetch_failure(err: &anyhow::Error) -> Self {
        SyncError::FetchFailure {
            details: format!("{:#}", err),
        }
    }

    /// Wraps a store error as a `PersistenceFailure` for the given operation.
    pub fn persistence_failure(operation: &str, err: &anyhow::Error) -> Self {
        SyncError::PersistenceFailure {
            operation: operation.to_string(),
            details: format!("{:#}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ExitCode tests
    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::AlertsPresent.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::AlertsPresent), "Alerts Present (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    // SyncError tests
    #[test]
    fn test_fetch_failure_display() {
        let error = SyncError::FetchFailure {
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to fetch advisory report"));
        assert!(display.contains("connection refused"));
        assert!(display.contains("left unchanged"));
    }

    #[test]
    fn test_fetch_failure_keeps_context_chain() {
        let err = anyhow::anyhow!("timed out").context("POST https://checker.test failed");
        let error = SyncError::fetch_failure(&err);
        let display = format!("{}", error);
        assert!(display.contains("POST https://checker.test failed"));
        assert!(display.contains("timed out"));
    }

    #[test]
    fn test_persistence_failure_display() {
        let err = anyhow::anyhow!("disk full");
        let error = SyncError::persistence_failure("create", &err);
        let display = format!("{}", error);
        assert!(display.contains("Failed to create security alerts"));
        assert!(display.contains("disk full"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_manifest_not_found_display() {
        let error = SyncError::ManifestNotFound {
            path: PathBuf::from("/app/composer.lock"),
            suggestion: "Pass --manifest".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Manifest file not found"));
        assert!(display.contains("/app/composer.lock"));
        assert!(display.contains("Pass --manifest"));
    }

    #[test]
    fn test_store_read_error_display() {
        let error = SyncError::StoreReadError {
            path: PathBuf::from("/var/alerts.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read alert store"));
        assert!(display.contains("/var/alerts.json"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_security_error_display() {
        let error = SyncError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
