//! Hosting overlay: image-to-view transform, redraw requests, live graphics.

mod graphic_overlay;
mod transform;

pub use graphic_overlay::{Graphic, GraphicOverlay, OverlayHandle};
pub use transform::{CameraFacing, ViewTransform};
