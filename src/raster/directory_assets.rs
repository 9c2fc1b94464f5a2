use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use parking_lot::Mutex;

use crate::error::{OverlayError, Result};
use crate::graphic::{AssetId, AssetProvider};

/// Loads `<dir>/<asset name>.png` on first use and caches the decoded image.
#[derive(Debug)]
pub struct DirectoryAssets {
    dir: PathBuf,
    cache: Mutex<HashMap<AssetId, Arc<RgbaImage>>>,
}

impl DirectoryAssets {
    /// Provider reading from `dir`; nothing is loaded yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Directory assets are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File an asset is loaded from.
    pub fn path_for(&self, id: AssetId) -> PathBuf {
        self.dir.join(format!("{}.png", id.name()))
    }

    /// Load every asset up front so missing files surface before the first frame.
    pub fn preload(&self) -> Result<()> {
        for id in AssetId::ALL {
            self.resolve(id)?;
        }
        Ok(())
    }
}

impl AssetProvider<Arc<RgbaImage>> for DirectoryAssets {
    fn resolve(&self, id: AssetId) -> Result<Arc<RgbaImage>> {
        if let Some(image) = self.cache.lock().get(&id) {
            return Ok(Arc::clone(image));
        }

        let path = self.path_for(id);
        if !path.is_file() {
            return Err(OverlayError::missing_asset(id.name()));
        }
        let image = image::open(&path)
            .map_err(|source| OverlayError::AssetDecode {
                name: id.name(),
                source,
            })?
            .to_rgba8();
        log::debug!(
            "loaded asset {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        let image = Arc::new(image);
        self.cache.lock().insert(id, Arc::clone(&image));
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_loads_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        let assets = DirectoryAssets::new(dir.path());
        RgbaImage::from_pixel(4, 2, Rgba([1, 2, 3, 255]))
            .save(assets.path_for(AssetId::Ears))
            .unwrap();

        let first = assets.resolve(AssetId::Ears).unwrap();
        assert_eq!(first.dimensions(), (4, 2));
        assert_eq!(first.get_pixel(0, 0), &Rgba([1, 2, 3, 255]));

        let second = assets.resolve(AssetId::Ears).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let assets = DirectoryAssets::new(dir.path());
        let err = assets.resolve(AssetId::Ears).unwrap_err();
        assert!(matches!(err, OverlayError::MissingAsset { name: "ears_small" }));
        assert!(assets.preload().is_err());
    }

    #[test]
    fn test_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let assets = DirectoryAssets::new(dir.path());
        std::fs::write(assets.path_for(AssetId::Ears), b"not a png").unwrap();
        let err = assets.resolve(AssetId::Ears).unwrap_err();
        assert!(matches!(err, OverlayError::AssetDecode { .. }));
    }
}
