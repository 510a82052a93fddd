//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::calculation::ensure_valid_rate;
use crate::error::{EngineError, EngineResult};

use super::types::CalculatorSettings;

/// Name of the settings file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "calculator.yaml";

/// Loads and provides access to calculator settings.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── calculator.yaml   # Super rate, server, demo and sample settings
/// ```
///
/// # Example
///
/// ```no_run
/// use payg_engine::config::ConfigLoader;
/// use payg_engine::calculation::TaxCalculator;
///
/// let loader = ConfigLoader::load("./config")?;
/// let calculator = TaxCalculator::from_settings(loader.settings())?;
/// # Ok::<(), payg_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: CalculatorSettings,
}

impl ConfigLoader {
    /// Loads settings from `calculator.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or a missing field (`ConfigParseError`)
    /// - A value is unusable, such as a negative super rate (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&path_str, &content)
    }

    /// Parses settings from YAML text; `path` is used in error messages.
    fn parse(path: &str, content: &str) -> EngineResult<Self> {
        let settings: CalculatorSettings =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&settings)?;

        Ok(Self { settings })
    }

    fn validate(settings: &CalculatorSettings) -> EngineResult<()> {
        ensure_valid_rate(settings.super_rate).map_err(|err| match err {
            EngineError::InvalidInput { field, message } => {
                EngineError::InvalidConfig { field, message }
            }
            other => other,
        })?;

        if settings.server.bind_address.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "server.bind_address".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if let Some(amount) = settings
            .demo
            .weekly_amounts
            .iter()
            .find(|amount| amount.is_sign_negative() && !amount.is_zero())
        {
            return Err(EngineError::InvalidConfig {
                field: "demo.weekly_amounts".to_string(),
                message: format!("must not contain negative amounts, got {}", amount),
            });
        }

        let sample = &settings.sample;
        if !sample.mean.is_finite() {
            return Err(EngineError::InvalidConfig {
                field: "sample.mean".to_string(),
                message: format!("must be a finite number, got {}", sample.mean),
            });
        }
        if !sample.std_dev.is_finite() || sample.std_dev < 0.0 {
            return Err(EngineError::InvalidConfig {
                field: "sample.std_dev".to_string(),
                message: format!("must be a finite non-negative number, got {}", sample.std_dev),
            });
        }

        Ok(())
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Consumes the loader and returns the settings.
    pub fn into_settings(self) -> CalculatorSettings {
        self.settings
    }
}
