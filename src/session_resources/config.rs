use serde::Deserialize;
use std::env::{self, VarError};
use std::fs;
use tracing::info;

use crate::session_resources::exceptions::AnalyticsExceptions;
use crate::session_resources::implementation::OutputFormat;
use crate::session_resources::session::Day;

pub const CONFIG_PATH_VARIABLE: &str = "HOBBY_TRACKER_CONFIG";

const DEFAULT_CONFIG: &str = include_str!("../../config/report.toml");

#[derive(Deserialize, Debug, Clone)]
pub struct ReportConfig {
    pub output: Output,
    pub report_settings: ReportSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Output {
    pub format: OutputFormat,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ReportSettings {
    pub long_session_threshold: i64,
    pub enrichment_long_session_threshold: i64,
    pub hobby_total_for: String,
    pub mood_tallies: Vec<String>,
    pub listed_days: Vec<String>,
}

impl ReportConfig {
    pub fn parse_config(source: &str) -> Result<Self, AnalyticsExceptions> {
        let parsed_data: ReportConfig = toml::from_str(source)?;
        // Unknown day names fail here, before any report output
        parsed_data.report_settings.days()?;
        Ok(parsed_data)
    }

    pub fn read_config(source_path: &str) -> Result<Self, AnalyticsExceptions> {
        let lines = fs::read_to_string(source_path)?;
        ReportConfig::parse_config(&lines)
    }

    /// Reads the file named by `HOBBY_TRACKER_CONFIG`, falling back to the
    /// embedded defaults when the variable is unset.
    pub fn load() -> Result<Self, AnalyticsExceptions> {
        ReportConfig::load_from(env::var(CONFIG_PATH_VARIABLE))
    }

    pub fn load_from(config_path: Result<String, VarError>) -> Result<Self, AnalyticsExceptions> {
        match config_path {
            Ok(source_path) => {
                info!(path = %source_path, "reading report config");
                ReportConfig::read_config(&source_path)
            }
            Err(VarError::NotPresent) => ReportConfig::parse_config(DEFAULT_CONFIG),
            Err(VarError::NotUnicode(_)) => Err(AnalyticsExceptions::InvalidConfigPath {
                error_message: CONFIG_PATH_VARIABLE.to_string(),
            }),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: Output { format: OutputFormat::Table },
            report_settings: ReportSettings {
                long_session_threshold: 30,
                enrichment_long_session_threshold: 33,
                hobby_total_for: "drawing".to_string(),
                mood_tallies: ["relaxed", "focused", "excited", "creative", "calm"]
                    .iter()
                    .map(|mood| mood.to_string())
                    .collect(),
                listed_days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                    .iter()
                    .map(|day| day.to_string())
                    .collect(),
            },
        }
    }
}

impl ReportSettings {
    pub fn days(&self) -> Result<Vec<Day>, AnalyticsExceptions> {
        self.listed_days.iter().map(|day| day.parse::<Day>()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = ReportConfig::parse_config(DEFAULT_CONFIG).unwrap();
        let defaults = ReportConfig::default();

        assert_eq!(config.output.format, defaults.output.format);
        assert_eq!(config.report_settings.long_session_threshold, 30);
        assert_eq!(config.report_settings.enrichment_long_session_threshold, 33);
        assert_eq!(config.report_settings.hobby_total_for, "drawing");
        assert_eq!(config.report_settings.mood_tallies, defaults.report_settings.mood_tallies);
        assert_eq!(config.report_settings.listed_days, defaults.report_settings.listed_days);
    }

    #[test]
    fn json_output_and_short_day_names_parse() {
        let source = r#"
            [output]
            format = "Json"

            [report_settings]
            long_session_threshold = -5
            enrichment_long_session_threshold = 0
            hobby_total_for = "gaming"
            mood_tallies = []
            listed_days = ["sat", "Sunday"]
        "#;
        let config = ReportConfig::parse_config(source).unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.report_settings.long_session_threshold, -5);
        assert_eq!(config.report_settings.days().unwrap(), vec![Day::Saturday, Day::Sunday]);
    }

    #[test]
    fn unknown_day_fails_the_config() {
        let source = r#"
            [output]
            format = "Table"

            [report_settings]
            long_session_threshold = 30
            enrichment_long_session_threshold = 33
            hobby_total_for = "drawing"
            mood_tallies = ["calm"]
            listed_days = ["Caturday"]
        "#;

        assert!(matches!(
            ReportConfig::parse_config(source),
            Err(AnalyticsExceptions::UnknownDay { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        assert!(matches!(
            ReportConfig::parse_config("[output\nformat ="),
            Err(AnalyticsExceptions::ConfigError(_))
        ));
    }

    #[test]
    fn unset_path_falls_back_to_embedded_defaults() {
        let config = ReportConfig::load_from(Err(VarError::NotPresent)).unwrap();

        assert_eq!(config.output.format, OutputFormat::Table);
        assert_eq!(config.report_settings.hobby_total_for, "drawing");
    }

    #[test]
    fn non_unicode_path_is_reported() {
        let raw_path = OsString::from("hobby-tracker.toml");

        assert!(matches!(
            ReportConfig::load_from(Err(VarError::NotUnicode(raw_path))),
            Err(AnalyticsExceptions::InvalidConfigPath { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            ReportConfig::read_config("/nonexistent/hobby-tracker.toml"),
            Err(AnalyticsExceptions::IOError(_))
        ));
    }
}
