/// Opaque identifier assigned to a face by the external tracker.
pub type TrackId = u64;

/// Probability value reported when the detector could not compute it.
pub const UNCOMPUTED_PROBABILITY: f32 = -1.0;

/// One frame's worth of detected-face geometry and expression probabilities.
///
/// Coordinates are in image (detector) space. Observations are immutable
/// once published; a newer frame replaces the whole value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceObservation {
    /// Top-left x of the face box
    pub x: f32,
    /// Top-left y of the face box
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Head roll in degrees
    pub euler_z: f32,
    /// In `[0, 1]`, or [`UNCOMPUTED_PROBABILITY`]
    pub left_eye_open_probability: f32,
    /// In `[0, 1]`, or [`UNCOMPUTED_PROBABILITY`]
    pub right_eye_open_probability: f32,
    /// In `[0, 1]`, or [`UNCOMPUTED_PROBABILITY`]
    pub smiling_probability: f32,
}

impl FaceObservation {
    /// Create an observation for a face box with unknown expression and no roll.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            euler_z: 0.0,
            left_eye_open_probability: UNCOMPUTED_PROBABILITY,
            right_eye_open_probability: UNCOMPUTED_PROBABILITY,
            smiling_probability: UNCOMPUTED_PROBABILITY,
        }
    }

    /// Center of the face box in image space.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
