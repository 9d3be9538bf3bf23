//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};

use super::types::DemoConfig;

impl DemoConfig {
    /// Loads the run configuration from a YAML file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if the file is not valid YAML or has unknown keys
    ///
    /// # Example
    ///
    /// ```no_run
    /// use solid_payroll::config::DemoConfig;
    ///
    /// let config = DemoConfig::load("./demo.yaml")?;
    /// println!("pause: {}", config.pause_before_exit);
    /// # Ok::<(), solid_payroll::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| PayrollError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        info!(path = %path_str, ?config, "Loaded run configuration");
        Ok(config)
    }

    /// Loads the run configuration from `path`, or falls back to the
    /// built-in defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Same as [`DemoConfig::load`] when a path is given.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> PayrollResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let config = Self::default();
                info!(?config, "No configuration file given, using built-in defaults");
                Ok(config)
            }
        }
    }

    fn parse(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}
