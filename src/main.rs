mod cli;

use cli::{Args, Command, ListArgs, SyncArgs};
use owo_colors::OwoColorize;
use security_alert_sync::adapters::outbound::console::StderrProgressReporter;
use security_alert_sync::adapters::outbound::filesystem::{
    FileSystemReader, JsonFileAlertStore, ReportFileChecker, StdoutPresenter,
};
use security_alert_sync::adapters::outbound::network::HttpAdvisoryChecker;
use security_alert_sync::application::dto::{OutputFormat, SyncRequest, SyncResponse};
use security_alert_sync::application::factories::FormatterFactory;
use security_alert_sync::application::use_cases::{
    ListSecurityAlertsUseCase, SyncSecurityAlertsUseCase,
};
use security_alert_sync::config::{
    self, ConfigFile, CONFIG_FILENAME, DEFAULT_MANIFEST, DEFAULT_STORE, DEFAULT_TIMEOUT_SECONDS,
};
use security_alert_sync::ports::outbound::{AdvisoryChecker, OutputPresenter};
use security_alert_sync::shared::error::{ExitCode, SyncError};
use security_alert_sync::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Sync(sync_args) => run_sync(sync_args).await,
        Command::List(list_args) => run_list(list_args),
    }
}

/// Where the advisory report comes from
#[derive(Debug, PartialEq, Eq)]
enum AdvisorySource {
    Service { url: String, timeout: Duration },
    ReportFile(PathBuf),
}

/// Settings for one `sync` run after merging CLI flags, config file and defaults
#[derive(Debug)]
struct SyncSettings {
    manifest: PathBuf,
    store: PathBuf,
    source: AdvisorySource,
    format: OutputFormat,
    fail_on_alerts: bool,
}

impl SyncSettings {
    /// CLI flags take precedence over the config file, which takes
    /// precedence over built-in defaults.
    fn resolve(args: SyncArgs, config: ConfigFile) -> Result<Self> {
        let source = match args.report {
            Some(report) => AdvisorySource::ReportFile(report),
            None => {
                let url = args
                    .checker_url
                    .or(config.checker_url.filter(|url| !url.is_empty()))
                    .ok_or_else(|| SyncError::InvalidConfig {
                        message: "No advisory service configured".to_string(),
                        hint: format!(
                            "Pass --checker-url or --report, or set checker_url in {}.",
                            CONFIG_FILENAME
                        ),
                    })?;
                let seconds = args
                    .timeout
                    .or(config.timeout_seconds)
                    .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
                AdvisorySource::Service {
                    url,
                    timeout: Duration::from_secs(seconds),
                }
            }
        };

        Ok(Self {
            manifest: args
                .manifest
                .or(config.manifest)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST)),
            store: args
                .store
                .or(config.store)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE)),
            source,
            format: resolve_format(args.format, config.format.as_deref())?,
            fail_on_alerts: args.fail_on_alerts || config.fail_on_alerts.unwrap_or(false),
        })
    }
}

async fn run_sync(args: SyncArgs) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let settings = SyncSettings::resolve(args, config)?;

    let store = JsonFileAlertStore::open(settings.store.clone())?;
    let request = SyncRequest::new(settings.manifest.clone());

    let response = match &settings.source {
        AdvisorySource::ReportFile(path) => {
            execute_sync(ReportFileChecker::new(path.clone()), store, request).await?
        }
        AdvisorySource::Service { url, timeout } => {
            let checker = HttpAdvisoryChecker::new(url.clone(), *timeout, FileSystemReader::new())?;
            execute_sync(checker, store, request).await?
        }
    };

    let formatter = FormatterFactory::create(settings.format);
    StdoutPresenter::new().present(&formatter.format_sync(&response)?)?;

    if settings.fail_on_alerts && response.has_active_alerts() {
        Ok(ExitCode::AlertsPresent)
    } else {
        Ok(ExitCode::Success)
    }
}

async fn execute_sync<C: AdvisoryChecker>(
    checker: C,
    store: JsonFileAlertStore,
    request: SyncRequest,
) -> Result<SyncResponse> {
    let mut use_case = SyncSecurityAlertsUseCase::new(checker, store, StderrProgressReporter::new());
    use_case.execute(request).await
}

fn run_list(args: ListArgs) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let store_path = args
        .store
        .or(config.store)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE));
    let format = resolve_format(args.format, config.format.as_deref())?;

    let store = JsonFileAlertStore::open(store_path)?;
    let alerts = ListSecurityAlertsUseCase::new(store).execute(args.package.as_deref())?;

    let formatter = FormatterFactory::create(format);
    StdoutPresenter::new().present(&formatter.format_alerts(&alerts)?)?;

    Ok(ExitCode::Success)
}

/// Loads the explicit config file, or discovers one in the current directory.
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

fn resolve_format(cli: Option<OutputFormat>, config: Option<&str>) -> Result<OutputFormat> {
    match (cli, config) {
        (Some(format), _) => Ok(format),
        (None, Some(value)) => value.parse().map_err(|message| {
            SyncError::InvalidConfig {
                message,
                hint: "Use format: text or format: json.".to_string(),
            }
            .into()
        }),
        (None, None) => Ok(OutputFormat::default()),
    }
}
