use clap::{Parser, Subcommand};
use std::path::PathBuf;

use security_alert_sync::application::dto::OutputFormat;

/// Keep package security alerts in step with an advisory service
#[derive(Parser, Debug)]
#[command(name = "security-alert-sync")]
#[command(version)]
#[command(
    about = "Synchronize package security alerts with an advisory service",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a fresh advisory report and reconcile the alert store with it
    Sync(SyncArgs),
    /// List the security alerts currently in the alert store
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct SyncArgs {
    /// Path to the manifest of installed packages (defaults to composer.lock)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Path to the JSON alert store (defaults to security-alerts.json)
    #[arg(short, long)]
    pub store: Option<PathBuf>,

    /// URL of the advisory service the manifest is posted to
    #[arg(long, value_name = "URL", conflicts_with = "report")]
    pub checker_url: Option<String>,

    /// Read the advisory report from a file instead of querying a service
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Request timeout for the advisory service, in seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Exit with code 1 when alerts remain after synchronization
    #[arg(long)]
    pub fail_on_alerts: bool,

    /// Path to a config file (defaults to security-alert-sync.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Path to the JSON alert store (defaults to security-alerts.json)
    #[arg(short, long)]
    pub store: Option<PathBuf>,

    /// Only list alerts for this package
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to a config file (defaults to security-alert-sync.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sync_with_report() {
        let args = Args::try_parse_from([
            "security-alert-sync",
            "sync",
            "--report",
            "report.json",
            "--store",
            "alerts.json",
            "-f",
            "json",
            "--fail-on-alerts",
        ])
        .unwrap();

        match args.command {
            Command::Sync(sync) => {
                assert_eq!(sync.report, Some(PathBuf::from("report.json")));
                assert_eq!(sync.store, Some(PathBuf::from("alerts.json")));
                assert_eq!(sync.format, Some(OutputFormat::Json));
                assert!(sync.fail_on_alerts);
                assert!(sync.manifest.is_none());
                assert!(sync.checker_url.is_none());
            }
            other => panic!("expected sync command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_sync_defaults() {
        let args = Args::try_parse_from(["security-alert-sync", "sync"]).unwrap();
        match args.command {
            Command::Sync(sync) => {
                assert!(sync.format.is_none());
                assert!(sync.timeout.is_none());
                assert!(!sync.fail_on_alerts);
                assert!(sync.config.is_none());
            }
            other => panic!("expected sync command, got {:?}", other),
        }
    }

    #[test]
    fn test_checker_url_conflicts_with_report() {
        let result = Args::try_parse_from([
            "security-alert-sync",
            "sync",
            "--checker-url",
            "https://security.example.com/check_lock",
            "--report",
            "report.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Args::try_parse_from(["security-alert-sync", "sync", "--timeout", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Args::try_parse_from(["security-alert-sync", "list", "-f", "markdown"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_list_with_package() {
        let args = Args::try_parse_from([
            "security-alert-sync",
            "list",
            "--package",
            "silverstripe/framework",
        ])
        .unwrap();

        match args.command {
            Command::List(list) => {
                assert_eq!(list.package.as_deref(), Some("silverstripe/framework"));
                assert!(list.store.is_none());
            }
            other => panic!("expected list command, got {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["security-alert-sync"]).is_err());
    }
}
