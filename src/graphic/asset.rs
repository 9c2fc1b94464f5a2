//! Asset identifiers and the capability that resolves them to images.

use std::collections::HashMap;

use crate::error::{OverlayError, Result};
use crate::face::{EyeState, MouthState};

/// Identifies one decorative image by the expression state it depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Ears,
    LeftEye(EyeState),
    RightEye(EyeState),
    Mouth(MouthState),
}

impl AssetId {
    /// Every asset a face overlay may draw.
    pub const ALL: [AssetId; 10] = [
        AssetId::Ears,
        AssetId::LeftEye(EyeState::Open),
        AssetId::LeftEye(EyeState::Closed),
        AssetId::LeftEye(EyeState::HalfOpen),
        AssetId::RightEye(EyeState::Open),
        AssetId::RightEye(EyeState::Closed),
        AssetId::RightEye(EyeState::HalfOpen),
        AssetId::Mouth(MouthState::Closed),
        AssetId::Mouth(MouthState::Slight),
        AssetId::Mouth(MouthState::Wide),
    ];

    /// Stable resource name, also used as the asset file stem.
    pub fn name(self) -> &'static str {
        match self {
            AssetId::Ears => "ears_small",
            AssetId::LeftEye(EyeState::Open) => "female_003_left_eye01",
            AssetId::LeftEye(EyeState::Closed) => "female_003_left_eye02",
            AssetId::LeftEye(EyeState::HalfOpen) => "female_003_left_eye03",
            AssetId::RightEye(EyeState::Open) => "female_003_right_eye01",
            AssetId::RightEye(EyeState::Closed) => "female_003_right_eye02",
            AssetId::RightEye(EyeState::HalfOpen) => "female_003_right_eye03",
            AssetId::Mouth(MouthState::Closed) => "female_003_smile01",
            AssetId::Mouth(MouthState::Slight) => "female_003_smile02",
            AssetId::Mouth(MouthState::Wide) => "female_003_smile03",
        }
    }
}

/// Resolves asset identifiers to images a canvas can draw.
///
/// Implement this for whatever image store the host has: bundled resources,
/// files on disk, GPU textures.
pub trait AssetProvider<I> {
    /// Look up the image for `id`, failing with
    /// [`OverlayError::MissingAsset`] when none is registered.
    fn resolve(&self, id: AssetId) -> Result<I>;
}

/// In-memory asset table.
#[derive(Debug, Clone)]
pub struct StaticAssets<I> {
    images: HashMap<AssetId, I>,
}

impl<I> Default for StaticAssets<I> {
    fn default() -> Self {
        Self {
            images: HashMap::new(),
        }
    }
}

impl<I> StaticAssets<I> {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image, replacing any previous one for `id`.
    pub fn insert(&mut self, id: AssetId, image: I) -> Option<I> {
        self.images.insert(id, image)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, id: AssetId, image: I) -> Self {
        self.insert(id, image);
        self
    }

    /// Unregister the image for `id`, returning it.
    pub fn remove(&mut self, id: AssetId) -> Option<I> {
        self.images.remove(&id)
    }
}

impl StaticAssets<String> {
    /// Table mapping every asset to its own resource name.
    pub fn named() -> Self {
        AssetId::ALL
            .into_iter()
            .fold(Self::new(), |assets, id| assets.with(id, id.name().to_string()))
    }
}

impl<I: Clone> AssetProvider<I> for StaticAssets<I> {
    fn resolve(&self, id: AssetId) -> Result<I> {
        self.images
            .get(&id)
            .cloned()
            .ok_or_else(|| OverlayError::missing_asset(id.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = AssetId::ALL.iter().map(|id| id.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AssetId::ALL.len());
    }

    #[test]
    fn test_named_table_resolves_everything() {
        let assets = StaticAssets::named();
        for id in AssetId::ALL {
            assert_eq!(assets.resolve(id).unwrap(), id.name());
        }
    }

    #[test]
    fn test_missing_asset() {
        let mut assets = StaticAssets::named();
        assets.remove(AssetId::Ears);
        let err = assets.resolve(AssetId::Ears).unwrap_err();
        assert!(matches!(
            err,
            OverlayError::MissingAsset {
                name: "ears_small"
            }
        ));
    }
}
