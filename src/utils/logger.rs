use crate::utils::error::{DeployError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives for diagnostics, e.g. `DEPLOY_LOG=deploy=debug`.
pub const LOG_ENV: &str = "DEPLOY_LOG";

/// Set to `json` for JSON lines instead of the compact format.
pub const LOG_FORMAT_ENV: &str = "DEPLOY_LOG_FORMAT";

const DEFAULT_FILTER: &str = "off";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Unset or unparsable directives fall back to `off`.
pub fn filter_for(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Silent unless `DEPLOY_LOG` is set, and
/// never writes to stdout.
pub fn init_cli_logger() -> Result<()> {
    let directives = std::env::var(LOG_ENV).ok();
    let format = LogFormat::from_env_value(std::env::var(LOG_FORMAT_ENV).ok().as_deref());

    let registry = tracing_subscriber::registry().with(filter_for(directives.as_deref()));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let result = match format {
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    };

    result.map_err(|e| DeployError::LoggerError {
        message: e.to_string(),
    })
}
