/// Logical render-target size in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Resolution {
    pub width: f32,
    pub height: f32,
}

impl Resolution {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions positive and finite.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height. Degenerate heights yield non-finite ratios; callers
    /// gate on [`is_valid`](Self::is_valid) first.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }
}
