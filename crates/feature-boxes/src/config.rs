//! Bounding box configuration

use face_mesh::ConfigError;
use serde::{Deserialize, Serialize};

/// Bounding box settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    /// Padding added on each side, as a fraction of the region extent
    pub padding: f32,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self { padding: 0.15 }
    }
}

impl BoxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_range("boxes.padding", self.padding, 0.0, 1.0)
    }
}
