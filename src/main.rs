mod cli;

use cli::Args;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;
use std::time::Duration;
use sw360_obligations::adapters::outbound::console::{
    StderrNotificationSink, StderrProgressReporter,
};
use sw360_obligations::adapters::outbound::network::{Sw360Client, DEFAULT_TIMEOUT_SECS};
use sw360_obligations::adapters::outbound::session::StaticTokenSession;
use sw360_obligations::application::dto::{
    ColumnLabels, OutputFormat, DEFAULT_MAX_CONCURRENT_FETCHES,
};
use sw360_obligations::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use sw360_obligations::application::use_cases::{
    GenerateObligationReportUseCase, InertReason, ObligationReportSession, RefreshOutcome,
};
use sw360_obligations::config::{self, ConfigFile};
use sw360_obligations::obligation_report::domain::ProjectId;
use sw360_obligations::ports::outbound::AccessToken;
use sw360_obligations::shared::error::{ExitCode, ObligationError};
use sw360_obligations::shared::Result;

/// Environment variable consulted when neither the CLI nor the config file carries a token
const TOKEN_ENV_VAR: &str = "SW360_TOKEN";

/// REST root of a default local SW360 deployment
const DEFAULT_BASE_URL: &str = "http://localhost:8080/resource/api";

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

/// Maps an error to the exit code scripts can branch on
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ObligationError>() {
        Some(ObligationError::AuthenticationRequired) => ExitCode::AuthenticationRequired,
        Some(ObligationError::InvalidProjectId { .. }) | Some(ObligationError::Validation { .. }) => {
            ExitCode::InvalidArguments
        }
        Some(ObligationError::Cancelled) => ExitCode::Cancelled,
        _ => ExitCode::ApplicationError,
    }
}

/// Effective settings after merging CLI, config file, environment and defaults
#[derive(Debug)]
struct Settings {
    project: String,
    base_url: String,
    token: Option<String>,
    auth_scheme: String,
    format: OutputFormat,
    output: Option<PathBuf>,
    max_concurrent_fetches: usize,
    timeout: Duration,
    column_labels: ColumnLabels,
}

impl Settings {
    fn resolve(args: Args, config: ConfigFile, env_token: Option<String>) -> Result<Self> {
        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(value)) => OutputFormat::from_str(value).map_err(|details| {
                ObligationError::ConfigError {
                    details,
                    hint: "Valid values for format are 'json' and 'markdown'".to_string(),
                }
            })?,
            (None, None) => OutputFormat::default(),
        };

        let token = args
            .token
            .or(config.token)
            .or(env_token)
            .filter(|token| !token.trim().is_empty());

        let auth_scheme = args
            .auth_scheme
            .or(config.auth_scheme)
            .unwrap_or_else(|| AccessToken::DEFAULT_SCHEME.to_string());
        if auth_scheme.trim().is_empty() || auth_scheme.chars().any(char::is_whitespace) {
            return Err(ObligationError::Validation {
                message: format!("Authorization scheme '{}' must be a single word", auth_scheme),
            }
            .into());
        }

        Ok(Self {
            project: args.project,
            base_url: args
                .base_url
                .or(config.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token,
            auth_scheme,
            format,
            output: args.output.or(config.output).map(PathBuf::from),
            max_concurrent_fetches: args
                .concurrency
                .map(usize::from)
                .or(config.max_concurrent_fetches)
                .unwrap_or(DEFAULT_MAX_CONCURRENT_FETCHES),
            timeout: Duration::from_secs(
                args.timeout
                    .or(config.timeout_secs)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            column_labels: config.column_labels.unwrap_or_default(),
        })
    }
}

fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => {
            let current_dir = std::env::current_dir()?;
            config::discover_config(&current_dir)?
        }
    };
    Ok(config.unwrap_or_default())
}

fn parse_project_id(project: &str) -> Result<ProjectId> {
    ProjectId::new(project.to_string()).map_err(|e| {
        ObligationError::InvalidProjectId {
            id: project.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let env_token = std::env::var(TOKEN_ENV_VAR).ok();
    let settings = Settings::resolve(args, config, env_token)?;

    let project_id = parse_project_id(&settings.project)?;

    // Create adapters (Dependency Injection)
    let repository = Sw360Client::new(&settings.base_url, settings.timeout)?;
    let progress_reporter = StderrProgressReporter::new();
    let token_session =
        StaticTokenSession::from_parts(&settings.auth_scheme, settings.token.as_deref());
    let notifications = StderrNotificationSink::new();

    let use_case = GenerateObligationReportUseCase::new(repository, progress_reporter);
    let session = ObligationReportSession::new(use_case, token_session, notifications)
        .with_max_concurrent_fetches(settings.max_concurrent_fetches);

    log::info!(
        "Loading obligations of project {} from {}",
        project_id,
        settings.base_url
    );

    let outcome = {
        let mut activation = std::pin::pin!(session.activate(project_id));
        tokio::select! {
            outcome = &mut activation => outcome,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\n⚠️  Interrupted, cancelling the report run...");
                session.deactivate();
                activation.await
            }
        }
    };

    match outcome {
        RefreshOutcome::Completed { rows } => {
            log::info!("Report run completed with {} row(s)", rows);
            let report = session
                .snapshot()
                .report
                .ok_or_else(|| anyhow::anyhow!("Completed run left no report behind"))?;

            eprintln!("{}", FormatterFactory::progress_message(settings.format));
            let formatter = FormatterFactory::create(settings.format, settings.column_labels);
            let formatted_output = formatter.format(&report)?;

            let presenter_type = match settings.output {
                Some(path) => PresenterType::File(path),
                None => PresenterType::Stdout,
            };
            PresenterFactory::create(presenter_type).present(&formatted_output)?;

            Ok(ExitCode::Success)
        }
        RefreshOutcome::Inert(InertReason::Unauthenticated) => {
            Err(ObligationError::AuthenticationRequired.into())
        }
        RefreshOutcome::Inert(InertReason::SessionLoading) => Err(ObligationError::SessionLoading.into()),
        RefreshOutcome::Cancelled => {
            eprintln!("⚠️  Report run cancelled; no output written");
            Ok(ExitCode::Cancelled)
        }
        // The notification sink has already shown the message
        RefreshOutcome::Failed(_) => Ok(ExitCode::ApplicationError),
    }
}
