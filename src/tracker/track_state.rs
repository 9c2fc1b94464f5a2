/// Lifecycle of one tracked face's graphic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Created, no observation received yet
    #[default]
    New,
    /// Receiving observations and shown on the overlay
    Tracked,
    /// Temporarily not detected; hidden from the overlay
    Missing,
    /// Tracker gave up on the face
    Done,
}
