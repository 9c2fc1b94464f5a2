//! Builder for creating FaceObservation values from detector output.

use super::FaceObservation;

/// Builder for creating [`FaceObservation`] values from various box formats.
#[derive(Debug, Clone)]
pub struct FaceObservationBuilder {
    face: FaceObservation,
}

impl Default for FaceObservationBuilder {
    fn default() -> Self {
        Self {
            face: FaceObservation::new(0.0, 0.0, 0.0, 0.0),
        }
    }
}

impl FaceObservationBuilder {
    /// Create a new observation builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the face box in TLWH format (top-left x, top-left y, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.face.x = x;
        self.face.y = y;
        self.face.width = w;
        self.face.height = h;
        self
    }

    /// Set the face box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.tlwh(x1, y1, x2 - x1, y2 - y1)
    }

    /// Set the face box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.tlwh(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// Set the head roll in degrees.
    pub fn euler_z(mut self, degrees: f32) -> Self {
        self.face.euler_z = degrees;
        self
    }

    /// Set both eye-open probabilities.
    pub fn eyes_open(mut self, left: f32, right: f32) -> Self {
        self.face.left_eye_open_probability = left;
        self.face.right_eye_open_probability = right;
        self
    }

    /// Set the smile probability.
    pub fn smiling(mut self, probability: f32) -> Self {
        self.face.smiling_probability = probability;
        self
    }

    /// Build the final `FaceObservation`.
    pub fn build(self) -> FaceObservation {
        self.face
    }
}
