//! Configuration loading and validation.
//!
//! A missing config file is not an error: the built-in defaults apply.
//! A present-but-invalid file is an error, surfaced to the caller rather
//! than silently ignored - a config typo should not degrade to defaults.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::types::{Config, WinkeepConfig};
use crate::errors::ConfigError;

/// Load the TOML config from the default location (`<base>/config.toml`).
pub fn load_config(runtime: &Config) -> Result<WinkeepConfig, ConfigError> {
    load_config_from(&runtime.base_dir.join("config.toml"))
}

/// Load the TOML config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<WinkeepConfig, ConfigError> {
    if !path.exists() {
        debug!(
            event = "core.config.file_absent",
            path = %path.display(),
            message = "No config file, using defaults"
        );
        return Ok(WinkeepConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: WinkeepConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: e.to_string(),
        })?;

    validate_config(&config)?;

    debug!(
        event = "core.config.loaded",
        path = %path.display(),
        interval_secs = config.watch.interval_secs,
        mode = ?config.apply.mode
    );

    Ok(config)
}

fn validate_config(config: &WinkeepConfig) -> Result<(), ConfigError> {
    if config.watch.interval_secs == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "watch.interval_secs must be at least 1".to_string(),
        });
    }

    if config.apply.default_geometry.w <= 0 || config.apply.default_geometry.h <= 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "apply.default_geometry width and height must be positive".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.watch.interval_secs, 3);
    }

    #[test]
    fn test_parse_error_is_surfaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "watch = not-a-table").unwrap();
        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[watch]\ninterval_secs = 0\n").unwrap();
        let result = load_config_from(&path);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_negative_default_size_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[apply]\ndefault_geometry = { x = 0, y = 0, w = -1, h = 600 }\n",
        )
        .unwrap();
        let result = load_config_from(&path);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_full_config_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[watch]
interval_secs = 10

[apply]
settle_delay_ms = 100
mode = "stored"
default_geometry = { x = 0, y = 0, w = 1920, h = 1080 }
"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.watch.interval_secs, 10);
        assert_eq!(config.apply.settle_delay_ms, 100);
    }
}
