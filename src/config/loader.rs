//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate schedules
//! from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RateSchedule;

use super::types::{CreditConfig, RateConfig, ScheduleMetadata};

/// Loads and provides access to rate schedule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── schedule.yaml       # Scheme metadata
/// └── rates/
///     └── 2025-01-01.yaml # Rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use employment_credit::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
/// let rates = loader.rates_for(date)?;
/// println!("Base credit per head: {}", rates.base_per_head);
/// # Ok::<(), employment_credit::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CreditConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if `schedule.yaml` or `rates/` is missing, or
    ///   `rates/` holds no `.yaml` files
    /// - `ConfigParseError` if a file is not valid YAML, a rate is negative,
    ///   or two rate files share an effective date
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ScheduleMetadata>(&path.join("schedule.yaml"))?;

        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        let config = CreditConfig::new(metadata, rates);

        if let Some(pair) = config
            .rates()
            .windows(2)
            .find(|pair| pair[0].effective_date == pair[1].effective_date)
        {
            return Err(EngineError::ConfigParseError {
                path: rates_dir.display().to_string(),
                message: format!(
                    "more than one rate file is effective from {}",
                    pair[0].effective_date
                ),
            });
        }

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: CreditConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                rates.push(Self::load_yaml::<RateConfig>(&path)?);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CreditConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn schedule(&self) -> &ScheduleMetadata {
        self.config.metadata()
    }

    /// Returns the rates in force on `date`.
    ///
    /// The most recent rate configuration effective on or before `date` wins.
    ///
    /// # Errors
    ///
    /// Returns `RateNotFound` if `date` precedes every effective date.
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<RateSchedule> {
        self.config
            .rates()
            .iter()
            .rfind(|rc| rc.effective_date <= date)
            .map(|rc| rc.rates)
            .ok_or(EngineError::RateNotFound { date })
    }

    /// Returns the newest rate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the configuration holds no rates, which can
    /// only happen for a configuration passed to [`ConfigLoader::from_config`].
    pub fn latest_rates(&self) -> EngineResult<&RateConfig> {
        self.config
            .rates()
            .last()
            .ok_or_else(|| EngineError::ConfigNotFound {
                path: "no rate configuration loaded".to_string(),
            })
    }
}
