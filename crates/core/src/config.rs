use crate::error::CampaignError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Root application configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `ZAKAT_CAMPAIGN__`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub campaign: CampaignSettings,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values stamped into the generated content.
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignSettings {
    #[serde(default = "default_tracking_base_url")]
    pub tracking_base_url: String,
    #[serde(default = "default_utm_campaign")]
    pub utm_campaign: String,
    #[serde(default = "default_duration")]
    pub duration: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_json")]
    pub json: bool,
}

/// How the campaign package is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CampaignError::Config(format!(
                "unknown output format '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// Default functions
fn default_tracking_base_url() -> String {
    "zakatcalculator.asean".to_string()
}
fn default_utm_campaign() -> String {
    "zakat2024".to_string()
}
fn default_duration() -> String {
    "30 days".to_string()
}
fn default_log_json() -> bool {
    false
}

impl Default for CampaignSettings {
    fn default() -> Self {
        Self {
            tracking_base_url: default_tracking_base_url(),
            utm_campaign: default_utm_campaign(),
            duration: default_duration(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: default_log_json(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and an optional config file.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("ZAKAT_CAMPAIGN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_published_campaign() {
        let config = AppConfig::default();
        assert_eq!(config.campaign.tracking_base_url, "zakatcalculator.asean");
        assert_eq!(config.campaign.utm_campaign, "zakat2024");
        assert_eq!(config.campaign.duration, "30 days");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_missing_file_falls_through_to_defaults() {
        let config = AppConfig::load(Some("does-not-exist/zakat-campaign")).unwrap();
        assert_eq!(config.campaign.utm_campaign, "zakat2024");
    }
}
