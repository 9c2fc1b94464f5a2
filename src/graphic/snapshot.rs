//! Cross-thread publication of the latest face observation.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::face::FaceObservation;

/// Holds the most recent observation as an immutable shared snapshot.
///
/// A producer replaces the whole snapshot; readers clone the `Arc` and never
/// hold the lock while using it, so a reader sees either the previous or the
/// complete new observation.
#[derive(Debug, Default)]
pub struct ObservationSlot {
    current: RwLock<Option<Arc<FaceObservation>>>,
}

impl ObservationSlot {
    /// Empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored observation.
    pub fn publish(&self, observation: FaceObservation) {
        let observation = Arc::new(observation);
        *self.current.write() = Some(observation);
    }

    /// Drop the stored observation; later snapshots are `None`.
    pub fn clear(&self) {
        *self.current.write() = None;
    }

    /// Current observation, if any.
    pub fn snapshot(&self) -> Option<Arc<FaceObservation>> {
        self.current.read().clone()
    }
}
