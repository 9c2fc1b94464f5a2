/// Which way the camera faces. Front-camera previews are mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

/// Maps detector (preview image) coordinates to view pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewTransform {
    pub preview_width: u32,
    pub preview_height: u32,
    pub view_width: u32,
    pub view_height: u32,
    pub facing: CameraFacing,
}

impl ViewTransform {
    /// Transform for a preview of one size shown in a view of another.
    pub fn new(
        preview_width: u32,
        preview_height: u32,
        view_width: u32,
        view_height: u32,
        facing: CameraFacing,
    ) -> Self {
        Self {
            preview_width,
            preview_height,
            view_width,
            view_height,
            facing,
        }
    }

    /// Horizontal view pixels per preview pixel; 1.0 until both sizes are known.
    #[inline]
    pub fn width_scale_factor(&self) -> f32 {
        if self.preview_width == 0 || self.view_width == 0 {
            1.0
        } else {
            self.view_width as f32 / self.preview_width as f32
        }
    }

    /// Vertical view pixels per preview pixel; 1.0 until both sizes are known.
    #[inline]
    pub fn height_scale_factor(&self) -> f32 {
        if self.preview_height == 0 || self.view_height == 0 {
            1.0
        } else {
            self.view_height as f32 / self.preview_height as f32
        }
    }

    /// Scale a horizontal length from preview to view space.
    #[inline]
    pub fn scale_x(&self, horizontal: f32) -> f32 {
        horizontal * self.width_scale_factor()
    }

    /// Scale a vertical length from preview to view space.
    #[inline]
    pub fn scale_y(&self, vertical: f32) -> f32 {
        vertical * self.height_scale_factor()
    }

    /// Map a preview x coordinate into the view, mirroring for the front camera.
    #[inline]
    pub fn translate_x(&self, x: f32) -> f32 {
        match self.facing {
            CameraFacing::Back => self.scale_x(x),
            CameraFacing::Front => self.view_width as f32 - self.scale_x(x),
        }
    }

    #[inline]
    pub fn translate_y(&self, y: f32) -> f32 {
        self.scale_y(y)
    }
}
