//! Application state for the PAYG engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::TaxCalculator;
use crate::config::{CalculatorSettings, ConfigLoader};
use crate::error::EngineResult;

/// Shared application state.
///
/// Holds the loaded settings and a calculator built from them. Both are
/// immutable, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<CalculatorSettings>,
    calculator: TaxCalculator,
}

impl AppState {
    /// Creates a new application state from a configuration loader.
    pub fn new(config: ConfigLoader) -> EngineResult<Self> {
        Self::from_settings(config.into_settings())
    }

    /// Creates a new application state from settings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configured super rate is out of range.
    pub fn from_settings(settings: CalculatorSettings) -> EngineResult<Self> {
        let calculator = TaxCalculator::from_settings(&settings)?;
        Ok(Self {
            settings: Arc::new(settings),
            calculator,
        })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Returns the calculator.
    pub fn calculator(&self) -> &TaxCalculator {
        &self.calculator
    }

    /// Resolves whether amounts include super, falling back to the
    /// configured default when a request does not say.
    pub fn include_super(&self, requested: Option<bool>) -> bool {
        requested.unwrap_or(self.settings.include_super_in_amount)
    }
}
