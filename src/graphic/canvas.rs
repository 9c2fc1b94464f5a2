//! Drawing surface capability and a scoped transform guard.

use std::ops::{Deref, DerefMut};

use crate::error::{OverlayError, Result};
use crate::graphic::IntRect;

/// A 2D surface face overlays draw onto.
///
/// Mirrors the small subset of a retained-transform canvas that overlays
/// need: a save/restore stack, rotation about a pivot, and stretched image
/// blits.
pub trait Canvas {
    /// Image type this surface can blit.
    type Image;

    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching [`save`](Canvas::save).
    fn restore(&mut self) -> Result<()>;

    /// Rotate subsequent drawing by `degrees` (clockwise) about `(px, py)`.
    fn rotate(&mut self, degrees: f32, px: f32, py: f32);

    /// Draw `image` stretched to fill `bounds` under the current transform.
    fn draw_image(&mut self, image: &Self::Image, bounds: IntRect) -> Result<()>;

    /// Number of saves not yet restored.
    fn save_count(&self) -> usize;
}

/// Saves the canvas transform on creation and restores it on drop.
///
/// Drawing through the guard keeps save/restore balanced on every exit path,
/// including early returns with `?`.
pub struct ScopedTransform<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> ScopedTransform<'a, C> {
    /// Save `canvas`'s transform until the guard is dropped.
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for ScopedTransform<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for ScopedTransform<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for ScopedTransform<'_, C> {
    fn drop(&mut self) {
        if let Err(err) = self.canvas.restore() {
            log::warn!("failed to restore canvas transform: {}", err);
        }
    }
}

/// One call recorded by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall<I> {
    Save,
    Restore,
    Rotate { degrees: f32, px: f32, py: f32 },
    Image { image: I, bounds: IntRect },
}

/// Canvas that records calls instead of drawing.
///
/// Useful for headless hosts that forward draw commands elsewhere, and for
/// checking overlay layout.
#[derive(Debug, Clone)]
pub struct RecordingCanvas<I> {
    calls: Vec<DrawCall<I>>,
    depth: usize,
    fail_on_image: Option<usize>,
    images_drawn: usize,
}

impl<I> Default for RecordingCanvas<I> {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            depth: 0,
            fail_on_image: None,
            images_drawn: 0,
        }
    }
}

impl<I> RecordingCanvas<I> {
    /// Empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the `n`-th image draw (zero-based) fail with [`OverlayError::Canvas`].
    pub fn failing_on_image(mut self, n: usize) -> Self {
        self.fail_on_image = Some(n);
        self
    }

    /// Every recorded call, in order.
    pub fn calls(&self) -> &[DrawCall<I>] {
        &self.calls
    }

    /// Images drawn so far, with their bounds, in order.
    pub fn images(&self) -> impl Iterator<Item = (&I, IntRect)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Image { image, bounds } => Some((image, *bounds)),
            _ => None,
        })
    }

    /// Number of recorded saves.
    pub fn count_saves(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Save)).count()
    }

    /// Number of recorded restores.
    pub fn count_restores(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Restore))
            .count()
    }

    /// Forget recorded calls; the save depth is kept.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.images_drawn = 0;
    }
}

impl<I: Clone> Canvas for RecordingCanvas<I> {
    type Image = I;

    fn save(&mut self) {
        self.depth += 1;
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(OverlayError::Canvas(
                "restore without matching save".to_string(),
            ));
        }
        self.depth -= 1;
        self.calls.push(DrawCall::Restore);
        Ok(())
    }

    fn rotate(&mut self, degrees: f32, px: f32, py: f32) {
        self.calls.push(DrawCall::Rotate { degrees, px, py });
    }

    fn draw_image(&mut self, image: &I, bounds: IntRect) -> Result<()> {
        let index = self.images_drawn;
        self.images_drawn += 1;
        if self.fail_on_image == Some(index) {
            return Err(OverlayError::Canvas(format!("image draw {index} rejected")));
        }
        self.calls.push(DrawCall::Image {
            image: image.clone(),
            bounds,
        });
        Ok(())
    }

    fn save_count(&self) -> usize {
        self.depth
    }
}
