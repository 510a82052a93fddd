//! Configuration loading for the PAYG engine.
//!
//! This module loads calculator settings from a YAML file: the
//! superannuation rate, whether amounts include super, the HTTP bind
//! address, the demonstration batch and the sample generator defaults.
//! The rate tables themselves are compiled in (see [`crate::rates`]).
//!
//! # Example
//!
//! ```no_run
//! use payg_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Super rate: {}", loader.settings().super_rate);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{CalculatorSettings, DemoSettings, SampleSettings, ServerSettings};
