//! Error type shared by every rendering path.

use thiserror::Error;

/// Errors surfaced while configuring or rendering face overlays.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// No image is registered for the requested asset.
    #[error("missing overlay asset `{name}`")]
    MissingAsset { name: &'static str },

    /// The asset file exists but could not be decoded.
    #[cfg(feature = "raster")]
    #[error("failed to decode overlay asset `{name}`")]
    AssetDecode {
        name: &'static str,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed overlay config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid overlay config: {0}")]
    InvalidConfig(String),

    /// A drawing surface rejected an operation.
    #[error("canvas error: {0}")]
    Canvas(String),
}

impl OverlayError {
    pub(crate) fn missing_asset(name: &'static str) -> Self {
        log::warn!("overlay asset `{}` could not be resolved", name);
        Self::MissingAsset { name }
    }
}

pub type Result<T> = std::result::Result<T, OverlayError>;
