//! Dispatches per-frame tracker output to one GraphicFaceTracker per face.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::config::OverlayConfig;
use crate::face::{FaceObservation, TrackId};
use crate::graphic::{AssetProvider, Canvas, FaceGraphic};
use crate::overlay::GraphicOverlay;
use crate::tracker::{FaceTrackerListener, GraphicFaceTracker};

struct Entry<C: Canvas + ?Sized, P> {
    tracker: GraphicFaceTracker<C, P>,
    missing_frames: u32,
}

/// Owns one [`GraphicFaceTracker`] per face id reported by the tracker.
///
/// Each frame, new ids get a graphic, known ids are updated, and ids absent
/// from the frame are hidden. An id absent for `max_missing_frames`
/// consecutive frames is dropped.
pub struct FaceGraphicRegistry<C: Canvas + ?Sized, P> {
    overlay: GraphicOverlay<C>,
    assets: Arc<P>,
    config: OverlayConfig,
    max_missing_frames: u32,
    entries: BTreeMap<TrackId, Entry<C, P>>,
}

impl<C, P> FaceGraphicRegistry<C, P>
where
    C: Canvas + ?Sized + 'static,
    P: AssetProvider<C::Image> + Send + Sync + 'static,
{
    /// Empty registry; new graphics draw into `overlay` with `assets`.
    pub fn new(overlay: GraphicOverlay<C>, assets: Arc<P>, config: OverlayConfig) -> Self {
        Self {
            overlay,
            assets,
            config,
            max_missing_frames: 3,
            entries: BTreeMap::new(),
        }
    }

    /// Set how many consecutive frames an id may be absent before it is dropped.
    pub fn with_max_missing_frames(mut self, frames: u32) -> Self {
        self.max_missing_frames = frames.max(1);
        self
    }

    /// Overlay the registered graphics are added to.
    pub fn overlay(&self) -> &GraphicOverlay<C> {
        &self.overlay
    }

    /// Ids currently known, in ascending order.
    pub fn tracked_ids(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.entries.keys().copied()
    }

    /// Graphic for `id`, if the face is still known.
    pub fn graphic(&self, id: TrackId) -> Option<&Arc<FaceGraphic<P>>> {
        self.entries.get(&id).map(|entry| entry.tracker.graphic())
    }

    /// Number of known faces, shown or missing.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply one frame of tracker output.
    pub fn apply_frame(&mut self, faces: &[(TrackId, FaceObservation)]) {
        let mut seen = HashSet::with_capacity(faces.len());

        for &(id, observation) in faces {
            seen.insert(id);
            let entry = self.entries.entry(id).or_insert_with(|| {
                let mut tracker = GraphicFaceTracker::new(
                    self.overlay.clone(),
                    Arc::clone(&self.assets),
                    self.config.clone(),
                );
                tracker.on_new_item(id, observation);
                Entry {
                    tracker,
                    missing_frames: 0,
                }
            });
            entry.missing_frames = 0;
            entry.tracker.on_update(observation);
        }

        let max_missing = self.max_missing_frames;
        self.entries.retain(|id, entry| {
            if seen.contains(id) {
                return true;
            }
            entry.missing_frames += 1;
            if entry.missing_frames == 1 {
                entry.tracker.on_missing();
            }
            if entry.missing_frames >= max_missing {
                entry.tracker.on_done();
                return false;
            }
            true
        });
    }

    /// End tracking for every face.
    pub fn finish(&mut self) {
        for (_, mut entry) in std::mem::take(&mut self.entries) {
            entry.tracker.on_done();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphic::{RecordingCanvas, StaticAssets};

    type Registry = FaceGraphicRegistry<RecordingCanvas<String>, StaticAssets<String>>;

    fn registry() -> Registry {
        FaceGraphicRegistry::new(
            GraphicOverlay::new(),
            Arc::new(StaticAssets::named()),
            OverlayConfig::default(),
        )
    }

    fn face(x: f32) -> FaceObservation {
        FaceObservation::new(x, 0.0, 30.0, 30.0)
    }

    #[test]
    fn test_new_faces_are_shown() {
        let mut registry = registry();
        registry.apply_frame(&[(1, face(0.0)), (2, face(50.0))]);
        assert_eq!(registry.tracked_ids().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(registry.overlay().len(), 2);
        assert_eq!(registry.graphic(2).unwrap().observation().unwrap().x, 50.0);
    }

    #[test]
    fn test_update_replaces_observation() {
        let mut registry = registry();
        registry.apply_frame(&[(1, face(0.0))]);
        registry.apply_frame(&[(1, face(10.0))]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.overlay().len(), 1);
        assert_eq!(registry.graphic(1).unwrap().observation().unwrap().x, 10.0);
    }

    #[test]
    fn test_missing_then_dropped() {
        let mut registry = registry().with_max_missing_frames(2);
        registry.apply_frame(&[(1, face(0.0)), (2, face(50.0))]);

        registry.apply_frame(&[(2, face(55.0))]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.overlay().contains(1));
        assert!(registry.overlay().contains(2));

        registry.apply_frame(&[(2, face(60.0))]);
        assert_eq!(registry.tracked_ids().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_missing_face_can_return() {
        let mut registry = registry();
        registry.apply_frame(&[(1, face(0.0))]);
        registry.apply_frame(&[]);
        assert!(registry.overlay().is_empty());
        registry.apply_frame(&[(1, face(5.0))]);
        assert!(registry.overlay().contains(1));
        assert_eq!(registry.overlay().len(), 1);
    }

    #[test]
    fn test_finish_removes_everything() {
        let mut registry = registry();
        registry.apply_frame(&[(1, face(0.0)), (2, face(50.0))]);
        registry.finish();
        assert!(registry.is_empty());
        assert!(registry.overlay().is_empty());
    }
}
