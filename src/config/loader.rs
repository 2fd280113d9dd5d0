//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the standard
//! mileage rate schedule from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{MileageConfig, MileageMetadata, MileageRate};

/// Loads and provides access to the mileage rate configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the standard mileage rate in effect on a given date.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/mileage/
/// ├── mileage.yaml        # Schedule metadata
/// └── rates/
///     └── 2025-01-01.yaml # Rate effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use compensation_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/mileage").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
/// let rate = loader.standard_rate(date).unwrap();
/// println!("Standard rate: ${} per mile", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: MileageConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/mileage")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use compensation_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/mileage")?;
    /// # Ok::<(), compensation_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load mileage.yaml
        let metadata_path = path.join("mileage.yaml");
        let metadata = Self::load_yaml::<MileageMetadata>(&metadata_path)?;

        // Load all rate files from the rates directory
        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        Ok(Self {
            config: MileageConfig::new(metadata, rates),
        })
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
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<MileageRate>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

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
                let rate = Self::load_yaml::<MileageRate>(&path)?;
                rates.push(rate);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying mileage configuration.
    pub fn config(&self) -> &MileageConfig {
        &self.config
    }

    /// Returns the standard mileage rate in effect on the given date.
    ///
    /// # Arguments
    ///
    /// * `date` - The date for which to find the applicable rate
    ///
    /// # Returns
    ///
    /// Returns the rate per mile, or `RateNotFound` if no rate has an
    /// effective date on or before `date`.
    pub fn standard_rate(&self, date: NaiveDate) -> EngineResult<Decimal> {
        self.config
            .rate_on(date)
            .ok_or(EngineError::RateNotFound { date })
    }
}
