use thiserror::Error;

use crate::shared::infrastructure::logger::{LogLevel, LogType, Logger, ParseLogSettingError};

pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const LOG_TYPE: &str = "LOG_TYPE";
pub const COGNITO_CLIENT_ID: &str = "COGNITO_CLIENT_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {variable}: {source}")]
    InvalidLogSetting {
        variable: &'static str,
        #[source]
        source: ParseLogSettingError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub log_level: LogLevel,
    pub log_type: LogType,
    pub cognito_client_id: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any name to value lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let log_level = match read(LOG_LEVEL) {
            Some(v) => v.parse().map_err(|source| ConfigError::InvalidLogSetting {
                variable: LOG_LEVEL,
                source,
            })?,
            None => LogLevel::default(),
        };
        let log_type = match read(LOG_TYPE) {
            Some(v) => v.parse().map_err(|source| ConfigError::InvalidLogSetting {
                variable: LOG_TYPE,
                source,
            })?,
            None => LogType::default(),
        };

        Ok(Self {
            log_level,
            log_type,
            cognito_client_id: read(COGNITO_CLIENT_ID),
        })
    }

    pub fn logger(&self) -> Logger {
        Logger::new(self.log_level, self.log_type)
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[rstest]
    fn it_should_default_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_level, LogLevel::Info);
        assert_eq!(settings.log_type, LogType::Json);
        assert_eq!(settings.cognito_client_id, None);
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let settings = Settings::from_lookup(lookup(&[
            (LOG_LEVEL, "debug"),
            (LOG_TYPE, "TEXT"),
            (COGNITO_CLIENT_ID, "client-0001"),
        ]))
        .unwrap();

        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.log_type, LogType::Text);
        assert_eq!(settings.cognito_client_id.as_deref(), Some("client-0001"));
        assert_eq!(settings.logger().current_log_level(), LogLevel::Debug);
    }

    #[rstest]
    #[case(LOG_LEVEL, "LOUD")]
    #[case(LOG_TYPE, "xml")]
    fn it_should_reject_unknown_log_settings(#[case] variable: &str, #[case] value: &str) {
        let err = Settings::from_lookup(lookup(&[(variable, value)])).unwrap_err();

        assert!(err.to_string().starts_with(&format!("invalid {variable}: ")));
        assert!(err.to_string().contains(value));
    }

    #[rstest]
    fn it_should_treat_blank_values_as_unset() {
        let settings =
            Settings::from_lookup(lookup(&[(LOG_LEVEL, "  "), (COGNITO_CLIENT_ID, "")])).unwrap();

        assert_eq!(settings.log_level, LogLevel::Info);
        assert_eq!(settings.cognito_client_id, None);
    }
}
