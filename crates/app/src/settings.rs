//! Server settings, read from `settings.toml` and `FINANCEFLOW__*`
//! environment variables (e.g. `FINANCEFLOW__SERVER__PORT=4000`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    /// Log level applied to every crate of the workspace.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub database: Database,
    pub bind: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub server: Option<Server>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file("settings")
    }

    pub fn from_file(name: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix("FINANCEFLOW").separator("__"))
            .build()?
            .try_deserialize()
    }
}
