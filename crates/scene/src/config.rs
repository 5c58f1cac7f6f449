use serde::{Deserialize, Serialize};

/// Scene background (sky blue).
pub const SKY_BLUE: u32 = 0x87CEEB;

/// Dimensions every geometry builder derives its positions from.
///
/// Built once at startup and passed by reference into each builder. There is
/// no runtime source for these values; `Default` carries the compiled-in house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseConfig {
    /// Extent of the footprint along X.
    pub boundary_width: f32,
    /// Extent of the footprint along Z.
    pub boundary_height: f32,
    pub wall_height: f32,
    /// Height of the gable peak above the wall tops.
    pub roof_height: f32,
    pub wall_thickness: f32,
}

impl Default for HouseConfig {
    fn default() -> Self {
        Self {
            boundary_width: 40.0,
            boundary_height: 15.0,
            wall_height: 10.0,
            roof_height: 2.1,
            wall_thickness: 0.1,
        }
    }
}

/// Errors from configuration validation.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
}

impl HouseConfig {
    /// Check that every dimension can produce non-degenerate geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("boundary_width", self.boundary_width),
            ("boundary_height", self.boundary_height),
            ("wall_height", self.wall_height),
            ("roof_height", self.roof_height),
            ("wall_thickness", self.wall_thickness),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }

    /// Depth of each roof plane along its slope.
    pub fn roof_depth(&self) -> f32 {
        self.boundary_height * 3.8 / 5.0
    }
}
