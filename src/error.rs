//! Error types for the PAYG engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing tax, withholding
//! and superannuation figures.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the PAYG engine.
///
/// All engine operations return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payg_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calculator.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calculator.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contains a value the engine cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A monetary input or rate was negative, non-finite or out of range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input that was rejected.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// No row of a rate table matched a non-negative input.
    ///
    /// This always indicates a malformed or incomplete table.
    #[error("No {table} row matches amount {amount}")]
    TableLookupFailure {
        /// The table that was searched.
        table: String,
        /// The amount that could not be placed.
        amount: Decimal,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// A failure on one item of a batch.
///
/// Carries the position and input of the failing employee so the remaining
/// items of the batch can still be reported.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Employee #{position} (weekly amount {weekly_amount}) failed: {error}", position = .index + 1)]
pub struct BatchItemFailure {
    /// Zero-based position of the item in the input batch.
    pub index: usize,
    /// The weekly amount that was supplied for this item.
    pub weekly_amount: Decimal,
    /// The underlying engine error.
    #[source]
    pub error: EngineError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/calculator.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/calculator.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/calculator.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/calculator.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "super_rate".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'super_rate': must not be negative"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::invalid_input("weekly_amount", "must not be negative");
        assert_eq!(
            error.to_string(),
            "Invalid input 'weekly_amount': must not be negative"
        );
    }

    #[test]
    fn test_table_lookup_failure_displays_table_and_amount() {
        let error = EngineError::TableLookupFailure {
            table: "weekly withholding".to_string(),
            amount: dec!(1693),
        };
        assert_eq!(
            error.to_string(),
            "No weekly withholding row matches amount 1693"
        );
    }

    #[test]
    fn test_batch_item_failure_uses_one_based_position() {
        let failure = BatchItemFailure {
            index: 2,
            weekly_amount: dec!(-100),
            error: EngineError::invalid_input("weekly_amount", "must not be negative"),
        };
        assert_eq!(
            failure.to_string(),
            "Employee #3 (weekly amount -100) failed: Invalid input 'weekly_amount': must not be negative"
        );
    }

    #[test]
    fn test_batch_item_failure_exposes_source() {
        use std::error::Error;

        let failure = BatchItemFailure {
            index: 0,
            weekly_amount: dec!(-1),
            error: EngineError::invalid_input("weekly_amount", "must not be negative"),
        };
        assert!(failure.source().is_some());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<BatchItemFailure>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::invalid_input("salary", "not finite"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
