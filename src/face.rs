mod builder;
mod expression;
mod observation;

pub use builder::FaceObservationBuilder;
pub use expression::{EyeState, MouthState};
pub use observation::{FaceObservation, TrackId, UNCOMPUTED_PROBABILITY};
