use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// # Environment Variables
///
/// - `LOG_LEVEL`: default filter directive for Rolegate crates (default: `info`)
/// - `LOG_FORMAT`: `compact` or `json` (default: `compact`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("LOG_LEVEL").ok().as_deref(),
            env::var("LOG_FORMAT").ok().as_deref(),
        )
    }

    fn from_values(level: Option<&str>, format: Option<&str>) -> Self {
        let level = level
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or("info")
            .to_string();
        let format = match format.map(|f| f.trim().to_ascii_lowercase()).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };
        Self { level, format }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
