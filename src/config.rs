//! TOML configuration: penalty weights and the trend noise threshold.
//!
//! Every key is optional; missing keys fall back to defaults, and an absent
//! file is not an error unless a path was given explicitly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{A11yError, Result};
use crate::scoring::PenaltyWeights;
use crate::trends::DEFAULT_NOISE_THRESHOLD;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub weights: PenaltyWeights,
    pub noise_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: PenaltyWeights::default(),
            noise_threshold: DEFAULT_NOISE_THRESHOLD,
        }
    }
}

impl Config {
    /// Load config from an explicit path, or defaults when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|e| {
            A11yError::config(format!("cannot read config {}: {e}", path.display()))
        })?;
        let config: Config = toml::from_str(&raw).map_err(|e| {
            A11yError::config(format!("invalid config {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate().map_err(A11yError::config)?;
        if !(0.0..1.0).contains(&self.noise_threshold) {
            return Err(A11yError::config(format!(
                "noise_threshold must be in [0, 1), got {}",
                self.noise_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn missing_path_yields_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.noise_threshold, DEFAULT_NOISE_THRESHOLD);
        assert_eq!(config.weights.critical, PenaltyWeights::default().critical);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "noise-threshold = 0.1").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.noise_threshold, 0.1);
        assert_eq!(config.weights.serious, PenaltyWeights::default().serious);
    }

    #[test]
    fn weight_keys_use_kebab_case() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[weights]\nbroken-pages = 30.0").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.weights.broken_pages, 30.0);
        assert_eq!(config.weights.critical, PenaltyWeights::default().critical);
    }

    #[test]
    fn disordered_weights_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[weights]\ncritical = 1.0\nserious = 5.0").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, A11yError::Config(_)));
    }

    #[test]
    fn unreadable_explicit_path_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/a11ylens.toml"))).unwrap_err();
        assert!(matches!(err, A11yError::Config(_)));
    }
}
