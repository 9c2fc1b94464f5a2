//! Per-face lifecycle glue between an external face tracker and the overlay.
//!
//! Ids come from the tracker as given; nothing here associates detections
//! across frames.

mod graphic_tracker;
mod registry;
mod track_state;

pub use graphic_tracker::{FaceTrackerListener, GraphicFaceTracker};
pub use registry::FaceGraphicRegistry;
pub use track_state::TrackState;
