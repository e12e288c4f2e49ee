use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::constants::GRAVITY;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid glider configuration: {0}")]
    ValidationError(String),
}

/// Physical parameters of the glider and its environment.
///
/// Aspect ratio is derivable from span and area under a rectangular-wing
/// assumption (AR·A = b²) but is carried explicitly; consistency is the
/// caller's responsibility and only warned about here.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GliderConfig {
    /// Glider mass [kg]
    pub mass: f64,
    /// Parasitic drag coefficient
    pub c_Dp: f64,
    /// Wing reference area [m²]
    pub wing_area: f64,
    /// Wingspan [m]
    pub wing_span: f64,
    /// Air density [kg/m³]
    pub air_density: f64,
    /// Gravitational acceleration [m/s²]
    pub gravity: f64,
    /// Wing aspect ratio
    pub aspect_ratio: f64,
}

impl Default for GliderConfig {
    fn default() -> Self {
        // Reference small UAV glider
        let wing_area = 0.65;
        let wing_span = 3.306;
        Self {
            mass: 8.5,
            c_Dp: 0.033,
            wing_area,
            wing_span,
            air_density: 1.255,
            gravity: GRAVITY,
            aspect_ratio: wing_span * wing_span / wing_area,
        }
    }
}

impl GliderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GliderConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mass <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if self.wing_area <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "wing area must be positive, got {}",
                self.wing_area
            )));
        }
        if self.wing_span <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "wing span must be positive, got {}",
                self.wing_span
            )));
        }
        if self.air_density <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "air density must be positive, got {}",
                self.air_density
            )));
        }
        if self.aspect_ratio <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }

        let implied = self.wing_span * self.wing_span / self.wing_area;
        if (self.aspect_ratio - implied).abs() > 1e-2 * implied {
            warn!(
                "aspect ratio {} inconsistent with span²/area = {}",
                self.aspect_ratio, implied
            );
        }
        Ok(())
    }
}
