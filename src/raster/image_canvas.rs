use std::sync::Arc;

use image::{Rgba, RgbaImage};
use nalgebra::{Matrix3, Point2, Rotation2, Vector2};

use crate::error::{OverlayError, Result};
use crate::graphic::{Canvas, IntRect};

/// Canvas over an RGBA frame buffer.
///
/// Keeps the current transform as a homogeneous 2D matrix. Images are
/// stretched into their bounds with nearest sampling and alpha-blended over
/// the frame.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    frame: RgbaImage,
    matrix: Matrix3<f32>,
    stack: Vec<Matrix3<f32>>,
}

impl ImageCanvas {
    /// Transparent canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_frame(RgbaImage::new(width, height))
    }

    /// Draw on top of an existing frame, e.g. a camera preview.
    pub fn from_frame(frame: RgbaImage) -> Self {
        Self {
            frame,
            matrix: Matrix3::identity(),
            stack: Vec::new(),
        }
    }

    /// Frame drawn so far.
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// Take the drawn frame.
    pub fn into_frame(self) -> RgbaImage {
        self.frame
    }

    /// Current transform from drawing coordinates to frame pixels.
    pub fn matrix(&self) -> &Matrix3<f32> {
        &self.matrix
    }

    fn blit(&mut self, image: &RgbaImage, bounds: IntRect, inverse: &Matrix3<f32>) {
        let (left, top) = (bounds.left as f32, bounds.top as f32);
        let (width, height) = (bounds.width() as f32, bounds.height() as f32);
        let (src_w, src_h) = image.dimensions();

        let corners = [
            (left, top),
            (bounds.right as f32, top),
            (bounds.right as f32, bounds.bottom as f32),
            (left, bounds.bottom as f32),
        ]
        .map(|(x, y)| self.matrix.transform_point(&Point2::new(x, y)));

        let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
        let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for corner in &corners {
            min_x = min_x.min(corner.x);
            min_y = min_y.min(corner.y);
            max_x = max_x.max(corner.x);
            max_y = max_y.max(corner.y);
        }

        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = max_x.ceil().min(self.frame.width() as f32) as u32;
        let y1 = max_y.ceil().min(self.frame.height() as f32) as u32;

        for py in y0..y1 {
            for px in x0..x1 {
                let local = inverse.transform_point(&Point2::new(px as f32 + 0.5, py as f32 + 0.5));
                let u = (local.x - left) / width;
                let v = (local.y - top) / height;
                if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                    continue;
                }
                let sx = ((u * src_w as f32) as u32).min(src_w - 1);
                let sy = ((v * src_h as f32) as u32).min(src_h - 1);
                blend_over(self.frame.get_pixel_mut(px, py), *image.get_pixel(sx, sy));
            }
        }
    }
}

impl Canvas for ImageCanvas {
    type Image = Arc<RgbaImage>;

    fn save(&mut self) {
        self.stack.push(self.matrix);
    }

    fn restore(&mut self) -> Result<()> {
        self.matrix = self.stack.pop().ok_or_else(|| {
            OverlayError::Canvas("restore without matching save".to_string())
        })?;
        Ok(())
    }

    fn rotate(&mut self, degrees: f32, px: f32, py: f32) {
        let pivot = Vector2::new(px, py);
        let rotation = Rotation2::new(degrees.to_radians()).to_homogeneous();
        self.matrix = self.matrix
            * Matrix3::new_translation(&pivot)
            * rotation
            * Matrix3::new_translation(&-pivot);
    }

    fn draw_image(&mut self, image: &Arc<RgbaImage>, bounds: IntRect) -> Result<()> {
        if bounds.is_empty() || image.width() == 0 || image.height() == 0 {
            return Ok(());
        }
        let inverse = self
            .matrix
            .try_inverse()
            .ok_or_else(|| OverlayError::Canvas("transform is not invertible".to_string()))?;
        self.blit(image, bounds, &inverse);
        Ok(())
    }

    fn save_count(&self) -> usize {
        self.stack.len()
    }
}

/// Source-over compositing of straight-alpha pixels.
fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let src_a = src[3] as f32 / 255.0;
    if src_a <= 0.0 {
        return;
    }
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    for c in 0..3 {
        let value = (src[c] as f32 * src_a + dst[c] as f32 * dst_a * (1.0 - src_a)) / out_a;
        dst[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}
