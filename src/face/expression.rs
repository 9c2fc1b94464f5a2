//! Discrete expression states derived from detector probabilities.

use super::UNCOMPUTED_PROBABILITY;
use crate::config::OverlayConfig;

/// How open an eye is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EyeState {
    Open,
    HalfOpen,
    Closed,
}

impl EyeState {
    /// Classify an eye-open probability.
    ///
    /// An unknown probability draws the eye open.
    pub fn classify(probability: f32, config: &OverlayConfig) -> Self {
        if probability > config.eye_open_threshold || probability == UNCOMPUTED_PROBABILITY {
            EyeState::Open
        } else if probability < config.eye_half_open_threshold {
            EyeState::Closed
        } else {
            EyeState::HalfOpen
        }
    }
}

/// How wide the mouth is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouthState {
    Wide,
    Slight,
    Closed,
}

impl MouthState {
    /// Classify a smile probability. Unknown (-1) falls through to closed.
    pub fn classify(probability: f32, config: &OverlayConfig) -> Self {
        if probability > config.mouth_open_threshold {
            MouthState::Wide
        } else if probability > config.mouth_half_open_threshold {
            MouthState::Slight
        } else {
            MouthState::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eye(p: f32) -> EyeState {
        EyeState::classify(p, &OverlayConfig::default())
    }

    fn mouth(p: f32) -> MouthState {
        MouthState::classify(p, &OverlayConfig::default())
    }

    #[test]
    fn test_eye_open() {
        for p in [0.71, 0.8, 0.99, 1.0, UNCOMPUTED_PROBABILITY] {
            assert_eq!(eye(p), EyeState::Open, "p = {p}");
        }
    }

    #[test]
    fn test_eye_never_open_at_or_below_half_threshold() {
        for p in [0.0, 0.1, 0.25, 0.39, 0.4] {
            assert_ne!(eye(p), EyeState::Open, "p = {p}");
        }
        assert_eq!(eye(0.0), EyeState::Closed);
        assert_eq!(eye(0.39), EyeState::Closed);
    }

    #[test]
    fn test_eye_half_open_band() {
        for p in [0.41, 0.5, 0.6, 0.69] {
            assert_eq!(eye(p), EyeState::HalfOpen, "p = {p}");
        }
        // Boundaries are not strictly above the open threshold.
        assert_eq!(eye(0.7), EyeState::HalfOpen);
        assert_eq!(eye(0.4), EyeState::HalfOpen);
    }

    #[test]
    fn test_mouth_states() {
        assert_eq!(mouth(0.61), MouthState::Wide);
        assert_eq!(mouth(1.0), MouthState::Wide);
        assert_eq!(mouth(0.6), MouthState::Slight);
        assert_eq!(mouth(0.21), MouthState::Slight);
        assert_eq!(mouth(0.2), MouthState::Closed);
        assert_eq!(mouth(0.0), MouthState::Closed);
        assert_eq!(mouth(UNCOMPUTED_PROBABILITY), MouthState::Closed);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = OverlayConfig {
            eye_open_threshold: 0.5,
            eye_half_open_threshold: 0.5,
            ..OverlayConfig::default()
        };
        assert_eq!(EyeState::classify(0.5, &config), EyeState::HalfOpen);
        assert_eq!(EyeState::classify(0.49, &config), EyeState::Closed);
        assert_eq!(EyeState::classify(0.51, &config), EyeState::Open);
    }
}
