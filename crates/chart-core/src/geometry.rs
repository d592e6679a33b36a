// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    /// Area of a `width` x `height` surface left after removing `insets`.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }
    /// Grow by `pad` on every side, clamped to `[0, max_w] x [0, max_h]`.
    pub fn expand_clamped(&self, pad: i32, max_w: i32, max_h: i32) -> Self {
        Self {
            left: clamp(self.left - pad, 0, max_w),
            top: clamp(self.top - pad, 0, max_h),
            right: clamp(self.right + pad, 0, max_w),
            bottom: clamp(self.bottom + pad, 0, max_h),
        }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_rect() {
        let r = RectI32::inset(512, 512, &Insets::new(100, 20, 40, 60));
        assert_eq!(r, RectI32::from_ltrb(100, 40, 492, 452));
        assert_eq!((r.width(), r.height()), (392, 412));
    }

    #[test]
    fn expand_stays_in_bounds() {
        let r = RectI32::from_ltwh(2, 3, 10, 10).expand_clamped(4, 14, 20);
        assert_eq!(r, RectI32::from_ltrb(0, 0, 14, 17));
    }
}
