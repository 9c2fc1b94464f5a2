//! Cartoon face overlays for live camera previews.
//!
//! A face detector reports [`FaceObservation`]s per frame; a [`FaceGraphic`]
//! turns the latest one into ears, eyes and a mouth drawn over the face,
//! following its position, size and head roll. Eye and mouth images are
//! chosen from the detector's eye-open and smile probabilities.
//!
//! Drawing goes through the [`Canvas`] capability and images come from an
//! [`AssetProvider`], so hosts can plug in their own surface and resources.
//! The `raster` feature adds an RGBA frame-buffer canvas and a PNG asset
//! directory.
//!
//! ```ignore
//! use std::sync::Arc;
//! use face_overlay::{FaceGraphicRegistry, GraphicOverlay, OverlayConfig, CameraFacing};
//! use face_overlay::raster::{DirectoryAssets, ImageCanvas};
//!
//! let overlay = GraphicOverlay::<ImageCanvas>::new();
//! overlay.set_camera_info(640, 480, CameraFacing::Front);
//! overlay.set_view_size(1280, 960);
//!
//! let assets = Arc::new(DirectoryAssets::new("assets/"));
//! let mut registry = FaceGraphicRegistry::new(overlay.clone(), assets, OverlayConfig::default());
//!
//! // For every processed camera frame:
//! registry.apply_frame(&tracked_faces);
//! if overlay.take_invalidated() {
//!     let mut canvas = ImageCanvas::from_frame(preview_frame);
//!     overlay.draw(&mut canvas)?;
//! }
//! ```

pub mod config;
pub mod error;
pub mod face;
pub mod graphic;
pub mod overlay;
pub mod tracker;

#[cfg(feature = "raster")]
pub mod raster;

pub use config::OverlayConfig;
pub use error::{OverlayError, Result};
pub use face::{
    EyeState, FaceObservation, FaceObservationBuilder, MouthState, TrackId, UNCOMPUTED_PROBABILITY,
};
pub use graphic::{
    AssetId, AssetProvider, Canvas, FaceGraphic, FaceLayout, IntRect, RecordingCanvas,
    StaticAssets,
};
pub use overlay::{CameraFacing, Graphic, GraphicOverlay, OverlayHandle, ViewTransform};
pub use tracker::{FaceGraphicRegistry, FaceTrackerListener, GraphicFaceTracker, TrackState};
