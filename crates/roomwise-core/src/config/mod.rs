use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

pub const DEFAULT_DISPLAY_TIMEZONE: &str = "America/New_York";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// IANA, Windows or alias timezone id used for calendar dates and wall-clock times.
    pub timezone: String,
    /// Height of one hour row in the day grid.
    pub hour_height: f64,
    /// Height of the day header above the first hour row.
    pub header_offset: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub meetings_path: PathBuf,
    pub filter_path: Option<PathBuf>,
}

impl Settings {
    fn builder() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("display.timezone", DEFAULT_DISPLAY_TIMEZONE)?
            .set_default("display.hour_height", 100.0)?
            .set_default("display.header_offset", 40.0)?
            .set_default("source.meetings_path", "meetings.json")?)
    }

    /// ## Summary
    /// Loads configuration from environment variables (prefixed `ROOMWISE_`)
    /// and an optional `config.toml`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> CoreResult<Self> {
        let settings = Self::builder()?
            .add_source(
                config::Environment::with_prefix("ROOMWISE")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(config::Case::Snake)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;
        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Loads configuration from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is invalid or fails validation.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        let settings = Self::builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;
        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot drive a layout.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for non-positive grid sizes
    /// or an empty timezone.
    pub fn validate(&self) -> CoreResult<()> {
        if self.display.timezone.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "display.timezone must not be empty".to_string(),
            ));
        }
        if self.display.hour_height.is_nan() || self.display.hour_height <= 0.0 {
            return Err(CoreError::InvalidConfiguration(format!(
                "display.hour_height must be positive, got {}",
                self.display.hour_height
            )));
        }
        if self.display.header_offset < 0.0 {
            return Err(CoreError::InvalidConfiguration(format!(
                "display.header_offset must not be negative, got {}",
                self.display.header_offset
            )));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
