pub mod lambda;
pub mod toml_config;

use crate::adapters::database::DEFAULT_TABLE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_table_name, Validate};

#[cfg(feature = "cli")]
use self::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use clap::{ArgGroup, Parser};
#[cfg(feature = "cli")]
use serde_json::Value;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "calc-shim")]
#[command(about = "Feed a number through the calculation and persistence adapters")]
#[command(group(ArgGroup::new("input").required(true).args(["number", "event"])))]
pub struct CliConfig {
    /// Number to send, e.g. `4` or `-2.5`
    #[arg(allow_negative_numbers = true)]
    pub number: Option<String>,

    /// Raw JSON event, e.g. '{"number": 4}'
    #[arg(long)]
    pub event: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Table name reported by the simulated database
    #[arg(long)]
    pub table: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Builds the inbound event from either `--event` or the positional number.
    ///
    /// A positional value that is not valid JSON is sent as a string so the
    /// entry adapter reports it as an invalid `number`.
    pub fn event_json(&self) -> Result<Value> {
        if let Some(raw) = &self.event {
            return Ok(serde_json::from_str(raw)?);
        }

        let number = match &self.number {
            Some(text) => {
                serde_json::from_str::<Value>(text).unwrap_or_else(|_| Value::String(text.clone()))
            }
            None => Value::Null,
        };
        Ok(serde_json::json!({ "number": number }))
    }

    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    /// Command line flags win over the config file, which wins over defaults.
    pub fn resolve(&self, file: Option<&TomlConfig>) -> AppSettings {
        let mut settings = file.map(TomlConfig::settings).unwrap_or_default();

        if let Some(table) = &self.table {
            settings.table = table.clone();
        }
        settings.verbose |= self.verbose;
        settings.json_logs |= self.json_logs;
        settings
    }
}

/// Effective runtime settings after merging all configuration sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub table: String,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        validate_table_name("table", &self.table)
    }
}
