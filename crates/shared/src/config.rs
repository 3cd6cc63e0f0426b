//! Application configuration management.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::Shift;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report form defaults.
    #[serde(default)]
    pub form: FormConfig,
}

/// Values used to pre-fill the report form.
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    /// Day or night shift.
    #[serde(default)]
    pub shift: Shift,
    /// Reporting officer's name.
    #[serde(default)]
    pub officer_name: String,
    /// Officer's section, as displayed.
    #[serde(default = "default_section")]
    pub section: String,
    /// Officer's mobile number.
    #[serde(default)]
    pub mobile: String,
    /// Name of the wing on duty today.
    #[serde(default = "default_schedule_wing")]
    pub schedule_wing: String,
    /// Number of standard wings to list when `wings` is not given.
    #[serde(default = "default_wing_count")]
    pub wing_count: usize,
    /// Explicit wing list; overrides `wing_count`.
    #[serde(default)]
    pub wings: Option<Vec<WingConfig>>,
    /// Pins the report date instead of reading the system clock.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// A configured wing and its attendance count.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WingConfig {
    /// Wing label.
    pub name: String,
    /// Attendance count.
    #[serde(default)]
    pub count: u32,
}

fn default_section() -> String {
    "১".to_string()
}

fn default_schedule_wing() -> String {
    "0013(M)".to_string()
}

fn default_wing_count() -> usize {
    17
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            shift: Shift::default(),
            officer_name: String::new(),
            section: default_section(),
            mobile: String::new(),
            schedule_wing: default_schedule_wing(),
            wing_count: default_wing_count(),
            wings: None,
            date: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        Self::load_from("config", &run_mode)
    }

    /// Loads `{dir}/default` and `{dir}/{run_mode}` (both optional), then
    /// `HAJIRA__*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file is malformed or a value has the wrong type.
    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("HAJIRA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
