// File: crates/chart-core/src/scale.rs
// Summary: Value (horizontal) and category band (vertical) scale transforms for bar charts.

/// Value coordinate (e.g., revenue).
pub type Value = f64;

/// Horizontal linear scale mapping `[vmin, vmax]` to `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub left_px: f32,
    pub right_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(left_px: f32, right_px: f32, vmin: Value, mut vmax: Value) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { left_px, right_px, vmin, vmax }
    }
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        self.left_px + ((v - self.vmin) / (self.vmax - self.vmin)) as f32 * (self.right_px - self.left_px)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> Value {
        self.vmin + ((px - self.left_px) / (self.right_px - self.left_px)) as f64 * (self.vmax - self.vmin)
    }
}

/// Vertical band scale: `count` equal bands stacked from `bottom_px` up to `top_px`.
/// Band 0 sits nearest the origin (bottom).
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub count: usize,
}

impl BandScale {
    pub fn new(top_px: f32, bottom_px: f32, count: usize) -> Self {
        Self { top_px, bottom_px, count: count.max(1) }
    }
    #[inline]
    pub fn band_px(&self) -> f32 {
        (self.bottom_px - self.top_px) / self.count as f32
    }
    /// Vertical centre of band `i`.
    #[inline]
    pub fn center(&self, i: usize) -> f32 {
        self.bottom_px - (i as f32 + 0.5) * self.band_px()
    }
    /// Top and bottom pixel of a bar covering `fill` of band `i`.
    pub fn bar_span(&self, i: usize, fill: f32) -> (f32, f32) {
        let half = self.band_px() * fill.clamp(0.0, 1.0) * 0.5;
        let c = self.center(i);
        (c - half, c + half)
    }
}
