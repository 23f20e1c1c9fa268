//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LayoutConfig, RetentionPolicy, WhysConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RCA_*`)
/// 2. Project config (`rca.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RcaConfig {
    pub layout: LayoutConfig,
    pub whys: WhysConfig,
}

impl RcaConfig {
    /// Load configuration from `root/rca.toml` (if present) and the environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILE_NAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Read a single TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RcaConfig) -> Result<(), ConfigError> {
        let layout = &config.layout;
        for (field, value) in [
            ("layout.cell_width", layout.cell_width),
            ("layout.cell_height", layout.cell_height),
            ("layout.card_width", layout.card_width),
            ("layout.card_height", layout.card_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a positive number".to_string(),
                });
            }
        }
        if layout.card_width > layout.cell_width {
            return Err(ConfigError::ValidationFailed {
                field: "layout.card_width".to_string(),
                message: "must not exceed layout.cell_width".to_string(),
            });
        }
        if layout.card_height > layout.cell_height {
            return Err(ConfigError::ValidationFailed {
                field: "layout.card_height".to_string(),
                message: "must not exceed layout.cell_height".to_string(),
            });
        }
        if config.whys.max_chain_links == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "whys.max_chain_links".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn apply_env_overrides(config: &mut RcaConfig) {
        if let Ok(val) = std::env::var("RCA_MAX_CHAIN_LINKS") {
            if let Ok(v) = val.parse::<u32>() {
                config.whys.max_chain_links = v;
            }
        }
        if let Ok(val) = std::env::var("RCA_RETENTION") {
            match RetentionPolicy::from_str_name(&val) {
                Some(policy) => config.whys.retention = policy,
                None => tracing::warn!(value = %val, "ignoring unknown RCA_RETENTION"),
            }
        }
        if let Ok(val) = std::env::var("RCA_CELL_WIDTH") {
            if let Ok(v) = val.parse::<f64>() {
                config.layout.cell_width = v;
            }
        }
        if let Ok(val) = std::env::var("RCA_CELL_HEIGHT") {
            if let Ok(v) = val.parse::<f64>() {
                config.layout.cell_height = v;
            }
        }
        if let Ok(val) = std::env::var("RCA_CENTER_VALIDATED_CAUSE") {
            if let Ok(v) = val.parse::<bool>() {
                config.layout.center_validated_cause = v;
            }
        }
    }
}
