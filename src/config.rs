//! Tunable thresholds and offsets for face overlays.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, Result};

/// Configuration for [`FaceGraphic`](crate::FaceGraphic).
///
/// Every field has a default, so a config document only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Multiplier applied to a third of the face size to get the half-extent
    /// of the decoration box.
    pub head_size_factor: f32,
    /// Eye-open probability above which an eye is drawn open.
    pub eye_open_threshold: f32,
    /// Eye-open probability below which an eye is drawn closed.
    pub eye_half_open_threshold: f32,
    /// Smile probability above which the wide smile is drawn.
    pub mouth_open_threshold: f32,
    /// Smile probability above which the slight smile is drawn.
    pub mouth_half_open_threshold: f32,
    /// Minimum change in head roll, in degrees, before the canvas rotation follows it.
    pub rotate_threshold_degrees: f32,
    pub rotate_enabled: bool,
    /// Vertical offset of the eye images from the top of the box, in view pixels.
    pub eye_offset: f32,
    /// Vertical offset of the mouth image from the top of the box, in view pixels.
    pub mouth_offset: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            head_size_factor: 2.0,
            eye_open_threshold: 0.7,
            eye_half_open_threshold: 0.4,
            mouth_open_threshold: 0.6,
            mouth_half_open_threshold: 0.2,
            rotate_threshold_degrees: 2.0,
            rotate_enabled: true,
            eye_offset: 35.0,
            mouth_offset: 90.0,
        }
    }
}

impl OverlayConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded overlay config from {}", path.display());
        Ok(config)
    }

    /// Disable or enable following the head roll.
    pub fn with_rotation(mut self, enabled: bool) -> Self {
        self.rotate_enabled = enabled;
        self
    }

    /// Check that thresholds are ordered and factors are usable.
    pub fn validate(&self) -> Result<()> {
        if self.eye_half_open_threshold > self.eye_open_threshold {
            return Err(OverlayError::InvalidConfig(format!(
                "eye_half_open_threshold {} exceeds eye_open_threshold {}",
                self.eye_half_open_threshold, self.eye_open_threshold
            )));
        }
        if self.mouth_half_open_threshold > self.mouth_open_threshold {
            return Err(OverlayError::InvalidConfig(format!(
                "mouth_half_open_threshold {} exceeds mouth_open_threshold {}",
                self.mouth_half_open_threshold, self.mouth_open_threshold
            )));
        }
        if !(self.head_size_factor >= 0.0) {
            return Err(OverlayError::InvalidConfig(format!(
                "head_size_factor must be non-negative, got {}",
                self.head_size_factor
            )));
        }
        if !(self.rotate_threshold_degrees >= 0.0) {
            return Err(OverlayError::InvalidConfig(format!(
                "rotate_threshold_degrees must be non-negative, got {}",
                self.rotate_threshold_degrees
            )));
        }
        Ok(())
    }
}
