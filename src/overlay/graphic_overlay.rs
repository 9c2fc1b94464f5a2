use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::error::Result;
use crate::face::TrackId;
use crate::graphic::Canvas;
use crate::overlay::{CameraFacing, ViewTransform};

/// A drawable owned by a [`GraphicOverlay`].
pub trait Graphic<C: Canvas + ?Sized>: Send + Sync {
    /// Tracker id of the face this graphic decorates.
    fn track_id(&self) -> TrackId;

    /// Draw onto `canvas` in view coordinates.
    fn draw(&self, canvas: &mut C) -> Result<()>;
}

#[derive(Debug, Default)]
struct OverlayShared {
    transform: RwLock<ViewTransform>,
    invalidated: AtomicBool,
}

/// Shared view of the overlay given to graphics: the current transform and
/// the redraw request flag. Cheap to clone and safe to use from any thread.
#[derive(Debug, Clone, Default)]
pub struct OverlayHandle {
    shared: Arc<OverlayShared>,
}

impl OverlayHandle {
    /// Handle with an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current image-to-view transform.
    pub fn transform(&self) -> ViewTransform {
        *self.shared.transform.read()
    }

    /// Record the detector's preview size and camera facing.
    pub fn set_camera_info(&self, preview_width: u32, preview_height: u32, facing: CameraFacing) {
        {
            let mut transform = self.shared.transform.write();
            transform.preview_width = preview_width;
            transform.preview_height = preview_height;
            transform.facing = facing;
        }
        log::debug!(
            "camera info set: {}x{} {:?}",
            preview_width,
            preview_height,
            facing
        );
        self.post_invalidate();
    }

    /// Record the size of the view the overlay is drawn into.
    pub fn set_view_size(&self, view_width: u32, view_height: u32) {
        {
            let mut transform = self.shared.transform.write();
            transform.view_width = view_width;
            transform.view_height = view_height;
        }
        self.post_invalidate();
    }

    /// Request a redraw. Callable from any thread.
    pub fn post_invalidate(&self) {
        self.shared.invalidated.store(true, Ordering::Release);
    }

    /// Consume a pending redraw request.
    pub fn take_invalidated(&self) -> bool {
        self.shared.invalidated.swap(false, Ordering::AcqRel)
    }
}

/// Container of graphics drawn on top of a camera preview.
///
/// Clones share the same graphics and transform.
pub struct GraphicOverlay<C: Canvas + ?Sized> {
    handle: OverlayHandle,
    graphics: Arc<RwLock<Vec<Arc<dyn Graphic<C>>>>>,
}

impl<C: Canvas + ?Sized> Clone for GraphicOverlay<C> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            graphics: Arc::clone(&self.graphics),
        }
    }
}

impl<C: Canvas + ?Sized> Default for GraphicOverlay<C> {
    fn default() -> Self {
        Self {
            handle: OverlayHandle::new(),
            graphics: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<C: Canvas + ?Sized> GraphicOverlay<C> {
    /// Empty overlay with an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle for graphics that draw through this overlay.
    pub fn handle(&self) -> OverlayHandle {
        self.handle.clone()
    }

    /// Snapshot of the current image-to-view transform.
    pub fn transform(&self) -> ViewTransform {
        self.handle.transform()
    }

    /// See [`OverlayHandle::set_camera_info`].
    pub fn set_camera_info(&self, preview_width: u32, preview_height: u32, facing: CameraFacing) {
        self.handle
            .set_camera_info(preview_width, preview_height, facing);
    }

    /// See [`OverlayHandle::set_view_size`].
    pub fn set_view_size(&self, view_width: u32, view_height: u32) {
        self.handle.set_view_size(view_width, view_height);
    }

    /// Request a redraw.
    pub fn post_invalidate(&self) {
        self.handle.post_invalidate();
    }

    /// Consume a pending redraw request.
    pub fn take_invalidated(&self) -> bool {
        self.handle.take_invalidated()
    }

    /// Add a graphic and request a redraw.
    pub fn add<G: Graphic<C> + 'static>(&self, graphic: Arc<G>) {
        let track_id = graphic.track_id();
        self.graphics.write().push(graphic);
        log::debug!("graphic added for face {}", track_id);
        self.post_invalidate();
    }

    /// Remove every graphic for `track_id`. Returns whether any was removed.
    pub fn remove(&self, track_id: TrackId) -> bool {
        let removed = {
            let mut graphics = self.graphics.write();
            let before = graphics.len();
            graphics.retain(|g| g.track_id() != track_id);
            before != graphics.len()
        };
        if removed {
            log::debug!("graphic removed for face {}", track_id);
            self.post_invalidate();
        }
        removed
    }

    /// Remove every graphic and request a redraw.
    pub fn clear(&self) {
        self.graphics.write().clear();
        self.post_invalidate();
    }

    /// Number of graphics currently shown.
    pub fn len(&self) -> usize {
        self.graphics.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphics.read().is_empty()
    }

    /// Whether a graphic for `track_id` is shown.
    pub fn contains(&self, track_id: TrackId) -> bool {
        self.graphics.read().iter().any(|g| g.track_id() == track_id)
    }

    /// Draw every graphic in insertion order, stopping at the first error.
    ///
    /// The graphic list is snapshotted first so producers can add or remove
    /// graphics while a frame is being drawn.
    pub fn draw(&self, canvas: &mut C) -> Result<()> {
        let graphics: Vec<_> = self.graphics.read().iter().cloned().collect();
        for graphic in graphics {
            graphic.draw(canvas)?;
        }
        Ok(())
    }
}
