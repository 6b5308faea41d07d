use rolegate_config::{LogConfig, LogFormat};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

/// Filter taken from `RUST_LOG` when set, otherwise `config.level` applied to every
/// `rolegate*` target.
pub fn build_env_filter(config: &LogConfig) -> EnvFilter {
    filter_from(std::env::var("RUST_LOG").ok().as_deref(), config)
}

fn filter_from(rust_log: Option<&str>, config: &LogConfig) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(format!("rolegate={}", config.level)))
}

fn build_layer(config: &LogConfig) -> Box<dyn Layer<Registry> + Send + Sync> {
    let env_filter = build_env_filter(config);

    match config.format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_filter(env_filter)
            .boxed(),
    }
}

/// Initialize console logging.
///
/// # Configuration
///
/// - **Log Level**: `RUST_LOG` if present, else `LOG_LEVEL` (default: "info")
/// - **Format**: compact with file and line, or JSON lines when `LOG_FORMAT=json`
/// - **Target**: stderr, so command output on stdout stays machine readable
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(build_layer(config))
        .try_init()
}
