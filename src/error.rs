//! Error types for the payroll library.
//!
//! Salary calculation itself cannot fail. Errors only arise at the edges:
//! loading the run configuration and talking to the console.

use thiserror::Error;

/// The main error type for the payroll library.
///
/// # Example
///
/// ```
/// use solid_payroll::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/demo.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/demo.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
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

    /// Writing a notification to the output stream failed.
    #[error("Failed to write output: {message}")]
    OutputError {
        /// A description of the write failure.
        message: String,
    },

    /// Reading from the input stream failed.
    #[error("Failed to read input: {message}")]
    InputError {
        /// A description of the read failure.
        message: String,
    },

    /// The run summary could not be serialized.
    #[error("Failed to serialize summary: {message}")]
    SerializationError {
        /// A description of the serialization failure.
        message: String,
    },
}

impl PayrollError {
    /// Wraps an I/O error raised while writing output.
    pub fn output(err: std::io::Error) -> Self {
        PayrollError::OutputError {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
