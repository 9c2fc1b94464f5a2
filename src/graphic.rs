mod asset;
mod canvas;
mod face_graphic;
mod rect;
mod rotation;
mod snapshot;

pub use asset::{AssetId, AssetProvider, StaticAssets};
pub use canvas::{Canvas, DrawCall, RecordingCanvas, ScopedTransform};
pub use face_graphic::{FaceGraphic, FaceLayout};
pub use rect::{IntRect, Rect};
pub use rotation::RotationDamper;
pub use snapshot::ObservationSlot;
