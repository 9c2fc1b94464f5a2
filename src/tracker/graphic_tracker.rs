use std::sync::Arc;

use crate::config::OverlayConfig;
use crate::face::{FaceObservation, TrackId};
use crate::graphic::{AssetProvider, Canvas, FaceGraphic};
use crate::overlay::GraphicOverlay;
use crate::tracker::TrackState;

/// Callbacks an external face tracker issues for one face.
pub trait FaceTrackerListener {
    /// A new face id was assigned.
    fn on_new_item(&mut self, id: TrackId, observation: FaceObservation);

    /// The face was detected in the current frame.
    fn on_update(&mut self, observation: FaceObservation);

    /// The face was not detected in the current frame; it may come back.
    fn on_missing(&mut self);

    /// The face is gone for good.
    fn on_done(&mut self);
}

/// Keeps one [`FaceGraphic`] in step with the tracker's view of one face.
///
/// The graphic is added to the overlay on update, hidden when the face goes
/// missing, and removed when the tracker is done with it.
pub struct GraphicFaceTracker<C: Canvas + ?Sized, P> {
    overlay: GraphicOverlay<C>,
    graphic: Arc<FaceGraphic<P>>,
    state: TrackState,
}

impl<C, P> GraphicFaceTracker<C, P>
where
    C: Canvas + ?Sized + 'static,
    P: AssetProvider<C::Image> + Send + Sync + 'static,
{
    /// Tracker with a fresh graphic bound to `overlay`.
    pub fn new(overlay: GraphicOverlay<C>, assets: Arc<P>, config: OverlayConfig) -> Self {
        let graphic = Arc::new(FaceGraphic::new(overlay.handle(), assets, config));
        Self {
            overlay,
            graphic,
            state: TrackState::New,
        }
    }

    /// The graphic this tracker manages.
    pub fn graphic(&self) -> &Arc<FaceGraphic<P>> {
        &self.graphic
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TrackState {
        self.state
    }

    fn detach(&mut self) {
        self.overlay.remove(self.graphic.track_id());
    }
}

impl<C, P> FaceTrackerListener for GraphicFaceTracker<C, P>
where
    C: Canvas + ?Sized + 'static,
    P: AssetProvider<C::Image> + Send + Sync + 'static,
{
    fn on_new_item(&mut self, id: TrackId, _observation: FaceObservation) {
        self.graphic.set_track_id(id);
        log::debug!("tracking new face {}", id);
    }

    fn on_update(&mut self, observation: FaceObservation) {
        match self.state {
            TrackState::Tracked => {}
            TrackState::Done => {
                log::warn!(
                    "update for face {} after tracking ended",
                    self.graphic.track_id()
                );
                return;
            }
            TrackState::New | TrackState::Missing => {
                self.overlay.add(Arc::clone(&self.graphic));
                self.state = TrackState::Tracked;
            }
        }
        self.graphic.update(observation);
    }

    fn on_missing(&mut self) {
        if self.state == TrackState::Tracked {
            self.detach();
            self.state = TrackState::Missing;
        }
    }

    fn on_done(&mut self) {
        if self.state != TrackState::Done {
            self.detach();
            self.state = TrackState::Done;
            log::debug!("face {} done", self.graphic.track_id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphic::{RecordingCanvas, StaticAssets};

    type Tracker = GraphicFaceTracker<RecordingCanvas<String>, StaticAssets<String>>;

    fn tracker(overlay: &GraphicOverlay<RecordingCanvas<String>>) -> Tracker {
        GraphicFaceTracker::new(
            overlay.clone(),
            Arc::new(StaticAssets::named()),
            OverlayConfig::default(),
        )
    }

    #[test]
    fn test_lifecycle() {
        let overlay = GraphicOverlay::new();
        let mut tracker = tracker(&overlay);
        let face = FaceObservation::new(10.0, 10.0, 30.0, 30.0);

        tracker.on_new_item(7, face);
        assert_eq!(tracker.graphic().track_id(), 7);
        assert_eq!(tracker.state(), TrackState::New);
        assert!(overlay.is_empty());

        tracker.on_update(face);
        assert_eq!(tracker.state(), TrackState::Tracked);
        assert!(overlay.contains(7));

        tracker.on_update(face);
        assert_eq!(overlay.len(), 1);

        tracker.on_missing();
        assert_eq!(tracker.state(), TrackState::Missing);
        assert!(overlay.is_empty());

        tracker.on_update(face);
        assert!(overlay.contains(7));

        tracker.on_done();
        assert_eq!(tracker.state(), TrackState::Done);
        assert!(overlay.is_empty());

        tracker.on_update(face);
        assert!(overlay.is_empty());
    }
}
