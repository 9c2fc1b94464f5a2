/// Float box in view space, as left/top/right/bottom edges.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Box centered on `(cx, cy)` extending `half_w`/`half_h` each way.
    #[inline]
    pub fn from_center(cx: f32, cy: f32, half_w: f32, half_h: f32) -> Self {
        Self {
            left: cx - half_w,
            top: cy - half_h,
            right: cx + half_w,
            bottom: cy + half_h,
        }
    }

    /// Same box with its top edge moved down by `dy`.
    #[inline]
    pub fn offset_top(self, dy: f32) -> Self {
        Self {
            top: self.top + dy,
            ..self
        }
    }

    /// Same box with its bottom edge moved up by `dy`.
    #[inline]
    pub fn shrink_bottom(self, dy: f32) -> Self {
        Self {
            bottom: self.bottom - dy,
            ..self
        }
    }

    /// Pixel bounds, truncating each edge toward zero.
    #[inline]
    pub fn to_int(&self) -> IntRect {
        IntRect::truncate(self.left, self.top, self.right, self.bottom)
    }
}

/// Integer pixel bounds for an image, as (left, top, right, bottom).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    /// Bounds from explicit edges.
    #[inline]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Truncate float bounds toward zero, the way pixel bounds are assigned.
    ///
    /// Edges beyond the `i32` range saturate.
    #[inline]
    pub fn truncate(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left as i32, top as i32, right as i32, bottom as i32)
    }

    /// Horizontal extent; widened so saturated edges cannot overflow.
    #[inline]
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    /// Vertical extent; widened so saturated edges cannot overflow.
    #[inline]
    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    /// True when the bounds cover no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}
