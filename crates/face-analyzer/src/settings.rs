//! Layered analyzer configuration
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. Optional config file (format from its extension: TOML, JSON, YAML)
//! 3. Environment variables, e.g. `FACEFEAT_QUALITY__MAX_ROTATION_DEGREES=20`

use std::path::Path;

use config::{Config, Environment, File};
use feature_boxes::BoxConfig;
use morphology::MorphologyConfig;
use quality_gate::QualityConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::AnalysisError;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "FACEFEAT";

/// Complete pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub morphology: MorphologyConfig,
    pub quality: QualityConfig,
    pub boxes: BoxConfig,
}

impl AnalyzerConfig {
    /// Merge defaults, the optional file and the environment, then validate
    pub fn load(path: Option<&Path>) -> Result<Self, AnalysisError> {
        let defaults = Config::try_from(&Self::default())?;
        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = path {
            info!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path));
        }
        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        self.morphology.validate()?;
        self.quality.validate()?;
        self.boxes.validate()?;
        Ok(())
    }
}
