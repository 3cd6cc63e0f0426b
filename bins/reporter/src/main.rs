//! Hajira report generator
//!
//! Builds the daily wing attendance report and prints it to stdout.
//!
//! Usage:
//! - `hajira` - fill the form from `config/` and `HAJIRA__*` variables
//! - `hajira request.json` - compose a serialized report request as-is

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hajira_core::calendar::{Clock, FixedClock, SystemClock};
use hajira_core::reports::SUCCESS_NOTICE;
use hajira_core::{ReportComposer, ReportError, ReportForm, ReportRequest};
use hajira_shared::{AppConfig, AppError, AppResult};

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hajira=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let request_path = std::env::args().nth(1);

    let report = match run(request_path.as_deref()) {
        Ok(report) => report,
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            let code = u8::try_from(err.exit_code()).unwrap_or(1);
            return Ok(ExitCode::from(code));
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{report}").context("Failed to write report")?;
    info!("{SUCCESS_NOTICE}");

    Ok(ExitCode::SUCCESS)
}

fn run(request_path: Option<&str>) -> AppResult<String> {
    match request_path {
        Some(path) => compose_from_file(path),
        None => compose_from_config(),
    }
}

fn compose_from_file(path: &str) -> AppResult<String> {
    let raw = std::fs::read_to_string(path)?;
    let request: ReportRequest = serde_json::from_str(&raw)
        .map_err(|e| AppError::Validation(format!("Invalid request file {path}: {e}")))?;
    info!(path, wings = request.wings.len(), "Loaded report request");

    ReportComposer::compose(&request).map_err(notify)
}

fn compose_from_config() -> AppResult<String> {
    let config = AppConfig::load()?;
    let mut form = ReportForm::from(&config.form);

    // The date is read here, per report, never cached by the form
    let clock: Box<dyn Clock> = match config.form.date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let date = clock.today();
    debug!(%date, shift = %form.shift, wings = form.wings().len(), "Composing report");

    form.generate(date).map(str::to_owned).map_err(notify)
}

fn notify(err: ReportError) -> AppError {
    warn!(notice = err.notice(), "Report not generated");
    err.into()
}
