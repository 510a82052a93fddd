//! Configuration types for the PAYG engine.
//!
//! This module contains the strongly-typed settings structures that are
//! deserialized from `calculator.yaml`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::rates::DEFAULT_SUPER_RATE;

/// Top-level calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    /// Superannuation guarantee rate (e.g. 0.11 for 11%).
    pub super_rate: Decimal,
    /// Whether supplied weekly amounts already include super.
    #[serde(default = "default_include_super")]
    pub include_super_in_amount: bool,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// The demonstration batch.
    #[serde(default)]
    pub demo: DemoSettings,
    /// Defaults for the sample salary generator.
    #[serde(default)]
    pub sample: SampleSettings,
}

fn default_include_super() -> bool {
    true
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            super_rate: DEFAULT_SUPER_RATE,
            include_super_in_amount: default_include_super(),
            server: ServerSettings::default(),
            demo: DemoSettings::default(),
            sample: SampleSettings::default(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// The batch of weekly amounts used by the demonstration report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSettings {
    /// Weekly amounts, one per employee.
    pub weekly_amounts: Vec<Decimal>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            weekly_amounts: vec![
                dec!(1693),
                dec!(1358),
                dec!(1772),
                dec!(2234),
                dec!(1308),
                dec!(1308),
                dec!(2263),
                dec!(1835),
                dec!(1184),
                dec!(1717),
            ],
        }
    }
}

/// Sample salary generator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSettings {
    /// Number of salaries to draw.
    pub count: usize,
    /// Mean weekly salary.
    pub mean: f64,
    /// Standard deviation of weekly salary.
    pub std_dev: f64,
    /// Seed for reproducible draws.
    pub seed: u64,
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            count: 10,
            mean: 1431.0,
            std_dev: 527.0,
            seed: 42,
        }
    }
}
