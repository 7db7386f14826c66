//! Configuration for the soak driver.
//!
//! Supports YAML file and environment variable overrides. The tree itself
//! has no configuration beyond the comparator it is built with.

use serde::Deserialize;
use std::path::Path;

/// Driver configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Soak workload configuration.
    pub soak: SoakConfig,
}

/// Soak workload configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SoakConfig {
    /// Number of distinct keys inserted.
    pub keys: usize,
    /// Keys are sampled without replacement from `[-key_range, key_range)`.
    pub key_range: i64,
    /// RNG seed; a random one is drawn when unset.
    pub seed: Option<u64>,
    /// Run a full invariant check every N mutations (0: only at phase ends).
    pub validate_every: usize,
    /// Fraction of keys deleted with `remove` before draining with `pop`.
    pub remove_fraction: f64,
}

impl Default for SoakConfig {
    fn default() -> Self {
        Self {
            keys: 5000,
            key_range: 100_000,
            seed: None,
            validate_every: 0,
            remove_fraction: 0.0,
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("REDBLACK_CONFIG").unwrap_or_else(|_| "redblack.yaml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(keys) = std::env::var("REDBLACK_SOAK_KEYS") {
            if let Ok(k) = keys.parse() {
                self.soak.keys = k;
            }
        }

        if let Ok(seed) = std::env::var("REDBLACK_SOAK_SEED") {
            if let Ok(s) = seed.parse() {
                self.soak.seed = Some(s);
            }
        }

        if let Ok(range) = std::env::var("REDBLACK_SOAK_KEY_RANGE") {
            if let Ok(r) = range.parse() {
                self.soak.key_range = r;
            }
        }

        if let Ok(every) = std::env::var("REDBLACK_SOAK_VALIDATE_EVERY") {
            if let Ok(n) = every.parse() {
                self.soak.validate_every = n;
            }
        }

        if let Ok(fraction) = std::env::var("REDBLACK_SOAK_REMOVE_FRACTION") {
            if let Ok(f) = fraction.parse() {
                self.soak.remove_fraction = f;
            }
        }
    }

    /// Reject workloads that cannot be generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let soak = &self.soak;
        if soak.key_range <= 0 {
            return Err(ConfigError::Invalid(format!(
                "key_range must be positive, got {}",
                soak.key_range
            )));
        }
        let available = u64::try_from(soak.key_range)
            .ok()
            .and_then(|r| r.checked_mul(2))
            .unwrap_or(u64::MAX);
        if soak.keys as u64 > available {
            return Err(ConfigError::Invalid(format!(
                "cannot draw {} distinct keys from a range of {}",
                soak.keys, available
            )));
        }
        if !(0.0..=1.0).contains(&soak.remove_fraction) {
            return Err(ConfigError::Invalid(format!(
                "remove_fraction must be within [0, 1], got {}",
                soak.remove_fraction
            )));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
