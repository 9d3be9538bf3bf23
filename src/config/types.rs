//! Run configuration types.

use serde::Deserialize;

/// Console-session settings for the demonstration run.
///
/// Both switches default to off, so an empty file (or no file at all)
/// reproduces the plain four-line output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Wait for one line of input before returning.
    pub pause_before_exit: bool,
    /// Write the JSON run summary after the notifications.
    pub print_summary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disables_everything() {
        let config = DemoConfig::default();
        assert!(!config.pause_before_exit);
        assert!(!config.print_summary);
    }

    #[test]
    fn test_deserialize_full_config() {
        let yaml = "pause_before_exit: true\nprint_summary: true\n";
        let config: DemoConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.pause_before_exit);
        assert!(config.print_summary);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: DemoConfig = serde_yaml::from_str("print_summary: true\n").unwrap();
        assert!(!config.pause_before_exit);
        assert!(config.print_summary);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<DemoConfig, _> = serde_yaml::from_str("pause: true\n");
        assert!(result.is_err());
    }
}
