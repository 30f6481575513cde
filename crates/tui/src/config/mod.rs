use std::time::Duration;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Parser;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Prefills the login form when no email is remembered.
    pub email: String,
    /// IANA name; decides what "today" is.
    pub timezone: String,
    /// Where CSV and JSON exports are written.
    pub export_dir: String,
    pub state_path: String,
    /// Tracing output; logging is off when unset.
    pub log_file: Option<String>,
    /// Use the in-memory backend instead of the server.
    pub mock: bool,
    pub mock_latency_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            email: String::new(),
            timezone: "Asia/Kolkata".to_string(),
            export_dir: ".".to_string(),
            state_path: "config/tui_state.json".to_string(),
            log_file: None,
            mock: false,
            mock_latency_ms: 1000,
        }
    }
}

impl AppConfig {
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| AppError::Invalid(format!("timezone: {}", self.timezone)))
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}

/// The current calendar date in `tz`.
pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

#[derive(Debug, Parser)]
#[command(name = "financeflow_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:3000).
    #[arg(long)]
    base_url: Option<String>,
    /// Override email (password is never read from CLI).
    #[arg(long)]
    email: Option<String>,
    /// Override timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Override export directory.
    #[arg(long)]
    export_dir: Option<String>,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<String>,
    /// Run against the in-memory backend.
    #[arg(long)]
    mock: bool,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("FINANCEFLOW_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(email) = args.email {
        settings.email = email;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(export_dir) = args.export_dir {
        settings.export_dir = export_dir;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }
    if args.mock {
        settings.mock = true;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timezone_parses() {
        let config = AppConfig::default();
        assert_eq!(config.tz().unwrap(), chrono_tz::Asia::Kolkata);
    }

    #[test]
    fn bad_timezone_is_reported() {
        let config = AppConfig {
            timezone: "Mars/Base".to_string(),
            ..AppConfig::default()
        };
        assert!(config.tz().is_err());
    }
}
