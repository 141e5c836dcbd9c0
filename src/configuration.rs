use crate::report::ReportFormat;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_bool_from_anything;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub report: ReportSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize)]
pub struct ReportSettings {
    pub format: ReportFormat,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub sort_descending: bool,
}

#[derive(Debug, Deserialize)]
pub struct TelemetrySettings {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset
    pub level: String,
}

/// Reads `configuration/base.yaml` from the current directory, if present,
/// and `APP_`-prefixed environment variables on top of built-in defaults.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let config_dir = std::env::current_dir()
        .map(|dir| dir.join("configuration"))
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    get_configuration_from(&config_dir)
}

pub fn get_configuration_from(config_dir: &Path) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("report.format", "text")?
        .set_default("report.sort_descending", true)?
        .set_default("telemetry.level", "info")?
        .add_source(config::File::from(config_dir.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
