use crate::adapters::database::DEFAULT_TABLE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_table_name, Validate};
use std::env;

const LOG_FORMATS: &[&str] = &["json", "compact"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    pub table_name: String,
    pub log_format: String,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            table_name: lookup("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            log_format: lookup("LOG_FORMAT")
                .map(|format| format.to_ascii_lowercase())
                .unwrap_or_else(|| "json".to_string()),
        }
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_table_name("TABLE_NAME", &self.table_name)?;
        validate_one_of("LOG_FORMAT", &self.log_format, LOG_FORMATS)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> LambdaConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LambdaConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.table_name, "numbers");
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_variables() {
        let config = config_from(&[("TABLE_NAME", "prod-numbers"), ("LOG_FORMAT", "Compact")]);
        assert_eq!(config.table_name, "prod-numbers");
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config_from(&[("TABLE_NAME", "no spaces allowed")])
            .validate()
            .is_err());
        assert!(config_from(&[("LOG_FORMAT", "pretty")]).validate().is_err());
    }
}
