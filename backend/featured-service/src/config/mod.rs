use crate::error::{FeaturedError, Result};
use serde::Deserialize;

pub const DEFAULT_FEATURED_COUNT: usize = 8;
pub const DEFAULT_MAX_PER_DAY: usize = 2;
pub const DEFAULT_MAX_PER_CAMERA: usize = 3;
pub const DEFAULT_MAX_PER_ASPECT: usize = 4;

/// Defaults substituted for unset selection options.
///
/// Environment variables (all optional):
/// - `FEATURED_DEFAULT_COUNT`
/// - `FEATURED_MAX_PER_DAY`
/// - `FEATURED_MAX_PER_CAMERA`
/// - `FEATURED_MAX_PER_ASPECT`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeaturedConfig {
    #[serde(default = "default_count")]
    pub default_count: usize,
    #[serde(default = "default_max_per_day")]
    pub max_per_day: usize,
    #[serde(default = "default_max_per_camera")]
    pub max_per_camera: usize,
    #[serde(default = "default_max_per_aspect")]
    pub max_per_aspect: usize,
}

fn default_count() -> usize {
    DEFAULT_FEATURED_COUNT
}

fn default_max_per_day() -> usize {
    DEFAULT_MAX_PER_DAY
}

fn default_max_per_camera() -> usize {
    DEFAULT_MAX_PER_CAMERA
}

fn default_max_per_aspect() -> usize {
    DEFAULT_MAX_PER_ASPECT
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_FEATURED_COUNT,
            max_per_day: DEFAULT_MAX_PER_DAY,
            max_per_camera: DEFAULT_MAX_PER_CAMERA,
            max_per_aspect: DEFAULT_MAX_PER_ASPECT,
        }
    }
}

impl FeaturedConfig {
    /// Load from `FEATURED_*` environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let config: FeaturedConfig = envy::prefixed("FEATURED_").from_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("FEATURED_DEFAULT_COUNT", self.default_count),
            ("FEATURED_MAX_PER_DAY", self.max_per_day),
            ("FEATURED_MAX_PER_CAMERA", self.max_per_camera),
            ("FEATURED_MAX_PER_ASPECT", self.max_per_aspect),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(FeaturedError::Configuration(format!(
                    "{} must be greater than zero",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "FEATURED_DEFAULT_COUNT",
        "FEATURED_MAX_PER_DAY",
        "FEATURED_MAX_PER_CAMERA",
        "FEATURED_MAX_PER_ASPECT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = FeaturedConfig::default();
        assert_eq!(config.default_count, 8);
        assert_eq!(config.max_per_day, 2);
        assert_eq!(config.max_per_camera, 3);
        assert_eq!(config.max_per_aspect, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_without_override() {
        clear_env();

        let config = FeaturedConfig::from_env().unwrap();
        assert_eq!(config, FeaturedConfig::default());
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_with_override() {
        clear_env();
        std::env::set_var("FEATURED_DEFAULT_COUNT", "12");
        std::env::set_var("FEATURED_MAX_PER_DAY", "1");

        let config = FeaturedConfig::from_env().unwrap();
        assert_eq!(config.default_count, 12);
        assert_eq!(config.max_per_day, 1);
        assert_eq!(config.max_per_camera, DEFAULT_MAX_PER_CAMERA);
        assert_eq!(config.max_per_aspect, DEFAULT_MAX_PER_ASPECT);

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_rejects_zero_and_garbage() {
        clear_env();

        std::env::set_var("FEATURED_MAX_PER_CAMERA", "0");
        let err = FeaturedConfig::from_env().unwrap_err();
        assert!(matches!(err, FeaturedError::Configuration(_)));
        assert!(err.to_string().contains("FEATURED_MAX_PER_CAMERA"));

        std::env::set_var("FEATURED_MAX_PER_CAMERA", "many");
        let err = FeaturedConfig::from_env().unwrap_err();
        assert!(matches!(err, FeaturedError::Configuration(_)));

        clear_env();
    }
}
