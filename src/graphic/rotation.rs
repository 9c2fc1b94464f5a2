//! Hysteresis on head roll so overlays do not jitter with detector noise.

use crate::config::OverlayConfig;

/// Remembers the last applied roll angle and follows a new one only when it
/// moves by more than the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationDamper {
    last_degree: f32,
    threshold: f32,
    enabled: bool,
}

impl Default for RotationDamper {
    fn default() -> Self {
        Self::from_config(&OverlayConfig::default())
    }
}

impl RotationDamper {
    /// Damper starting at 0 degrees.
    pub fn new(threshold: f32, enabled: bool) -> Self {
        Self {
            last_degree: 0.0,
            threshold,
            enabled,
        }
    }

    /// Damper using the configured threshold and enable flag.
    pub fn from_config(config: &OverlayConfig) -> Self {
        Self::new(config.rotate_threshold_degrees, config.rotate_enabled)
    }

    /// Feed a candidate angle and return the angle to apply.
    ///
    /// When disabled the stored angle never changes.
    pub fn apply(&mut self, candidate: f32) -> f32 {
        if self.enabled && (candidate - self.last_degree).abs() > self.threshold {
            log::trace!(
                "rotation {:.2} -> {:.2} degrees",
                self.last_degree,
                candidate
            );
            self.last_degree = candidate;
        }
        self.last_degree
    }

    /// Angle applied by the most recent call to [`apply`](Self::apply).
    pub fn last_degree(&self) -> f32 {
        self.last_degree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hysteresis_sequence() {
        let mut damper = RotationDamper::default();
        let applied: Vec<f32> = [0.0, 1.5, 3.0, 3.1]
            .into_iter()
            .map(|a| damper.apply(a))
            .collect();
        assert_eq!(applied, vec![0.0, 0.0, 3.0, 3.0]);
    }

    #[test]
    fn test_exact_threshold_is_not_enough() {
        let mut damper = RotationDamper::new(2.0, true);
        assert_eq!(damper.apply(2.0), 0.0);
        assert_eq!(damper.apply(-2.5), -2.5);
        assert_eq!(damper.apply(-0.5), -2.5);
        assert_eq!(damper.apply(-0.4), -0.4);
    }

    #[test]
    fn test_disabled_keeps_angle() {
        let mut damper = RotationDamper::new(2.0, false);
        assert_eq!(damper.apply(45.0), 0.0);
        assert_eq!(damper.apply(-90.0), 0.0);
        assert_eq!(damper.last_degree(), 0.0);
    }
}
