//! Software raster backend: draws overlays into an RGBA frame buffer and
//! loads PNG assets from disk.

mod directory_assets;
mod image_canvas;

pub use directory_assets::DirectoryAssets;
pub use image_canvas::ImageCanvas;
