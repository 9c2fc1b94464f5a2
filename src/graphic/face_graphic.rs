//! Cartoon decorations for a single tracked face.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::config::OverlayConfig;
use crate::error::Result;
use crate::face::{EyeState, FaceObservation, MouthState, TrackId};
use crate::graphic::{
    AssetId, AssetProvider, Canvas, IntRect, ObservationSlot, Rect, RotationDamper,
    ScopedTransform,
};
use crate::overlay::{Graphic, OverlayHandle, ViewTransform};

/// Where each decoration goes for one observation, in view pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    /// Face center; also the rotation pivot.
    pub center: (f32, f32),
    /// Anchor box the decorations are stretched into. Not drawn.
    pub head: Rect,
    pub ears: IntRect,
    pub left_eye: IntRect,
    pub right_eye: IntRect,
    pub mouth: IntRect,
}

impl FaceLayout {
    /// Place the head box and every decoration for `face` in view space.
    pub fn compute(
        face: &FaceObservation,
        transform: &ViewTransform,
        config: &OverlayConfig,
    ) -> Self {
        let (cx, cy) = face.center();
        let x = transform.translate_x(cx);
        let y = transform.translate_y(cy);

        let x_offset = transform.scale_x(face.width / 3.0) * config.head_size_factor;
        let y_offset = transform.scale_y(face.height / 3.0) * config.head_size_factor;
        let head = Rect::from_center(x, y, x_offset, y_offset);

        let eyes = head.offset_top(config.eye_offset).to_int();
        Self {
            center: (x, y),
            head,
            ears: head.shrink_bottom(y_offset).to_int(),
            left_eye: eyes,
            right_eye: eyes,
            mouth: head.offset_top(config.mouth_offset).to_int(),
        }
    }
}

/// Draws ears, eyes and mouth over one tracked face.
///
/// `update` may be called from the detection thread while `render` runs on
/// the drawing thread; the observation is swapped as a whole snapshot.
pub struct FaceGraphic<P> {
    overlay: OverlayHandle,
    assets: Arc<P>,
    config: OverlayConfig,
    track_id: AtomicU64,
    observation: ObservationSlot,
    damper: Mutex<RotationDamper>,
}

impl<P> FaceGraphic<P> {
    /// Create a graphic drawing through `overlay`'s transform with `assets`.
    pub fn new(overlay: OverlayHandle, assets: Arc<P>, config: OverlayConfig) -> Self {
        let damper = RotationDamper::from_config(&config);
        Self {
            overlay,
            assets,
            config,
            track_id: AtomicU64::new(0),
            observation: ObservationSlot::new(),
            damper: Mutex::new(damper),
        }
    }

    /// Associate the graphic with the tracker's id for its face.
    pub fn set_track_id(&self, id: TrackId) {
        self.track_id.store(id, Ordering::Relaxed);
    }

    /// Tracker id set by [`set_track_id`](Self::set_track_id); 0 until then.
    pub fn track_id(&self) -> TrackId {
        self.track_id.load(Ordering::Relaxed)
    }

    /// Thresholds and offsets this graphic was created with.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Replace the observation with the most recent frame's and request a redraw.
    pub fn update(&self, observation: FaceObservation) {
        self.observation.publish(observation);
        self.overlay.post_invalidate();
    }

    /// Forget the observation; renders draw nothing until the next update.
    pub fn clear(&self) {
        self.observation.clear();
        self.overlay.post_invalidate();
    }

    /// Latest observation, if any.
    pub fn observation(&self) -> Option<Arc<FaceObservation>> {
        self.observation.snapshot()
    }

    /// Rotation currently applied to the decorations, in degrees.
    pub fn applied_rotation(&self) -> f32 {
        self.damper.lock().last_degree()
    }

    /// Draw the decorations for the latest observation.
    ///
    /// Draws nothing without an observation. A non-zero applied rotation is
    /// wrapped in a save/restore pair that is released even when a draw fails.
    pub fn render<C>(&self, canvas: &mut C) -> Result<()>
    where
        C: Canvas + ?Sized,
        P: AssetProvider<C::Image>,
    {
        let Some(face) = self.observation.snapshot() else {
            return Ok(());
        };

        let layout = FaceLayout::compute(&face, &self.overlay.transform(), &self.config);
        let degree = self.damper.lock().apply(face.euler_z);

        if degree != 0.0 {
            let (px, py) = layout.center;
            let mut scoped = ScopedTransform::new(canvas);
            scoped.rotate(degree, px, py);
            self.draw_decorations(&mut *scoped, &face, &layout)
        } else {
            self.draw_decorations(canvas, &face, &layout)
        }
    }

    fn draw_decorations<C>(
        &self,
        canvas: &mut C,
        face: &FaceObservation,
        layout: &FaceLayout,
    ) -> Result<()>
    where
        C: Canvas + ?Sized,
        P: AssetProvider<C::Image>,
    {
        let left_eye = EyeState::classify(face.left_eye_open_probability, &self.config);
        let right_eye = EyeState::classify(face.right_eye_open_probability, &self.config);
        let mouth = MouthState::classify(face.smiling_probability, &self.config);

        let parts = [
            (AssetId::Ears, layout.ears),
            (AssetId::LeftEye(left_eye), layout.left_eye),
            (AssetId::RightEye(right_eye), layout.right_eye),
            (AssetId::Mouth(mouth), layout.mouth),
        ];
        for (id, bounds) in parts {
            let image = self.assets.resolve(id)?;
            canvas.draw_image(&image, bounds)?;
        }
        Ok(())
    }
}

impl<C, P> Graphic<C> for FaceGraphic<P>
where
    C: Canvas + ?Sized,
    P: AssetProvider<C::Image> + Send + Sync,
{
    fn track_id(&self) -> TrackId {
        FaceGraphic::track_id(self)
    }

    fn draw(&self, canvas: &mut C) -> Result<()> {
        self.render(canvas)
    }
}
