// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, DPI, data parameters, font sizes, paddings).

/// Nominal figure edge, in inches.
pub const FIGURE_INCHES: f32 = 8.0;
/// Render resolution; `FIGURE_INCHES * DPI` lands on the target edge.
pub const DPI: f32 = 64.0;
/// Exact output edge, in pixels, after resampling.
pub const TARGET_PX: u32 = 512;

/// Default surface width in pixels.
pub const WIDTH: i32 = (FIGURE_INCHES * DPI) as i32;
/// Default surface height in pixels.
pub const HEIGHT: i32 = (FIGURE_INCHES * DPI) as i32;

/// Output file written by the generator, relative to the working directory.
pub const OUTPUT_FILE: &str = "chart.png";

/// Seed for the revenue sampler.
pub const SEED: u64 = 42;
pub const REVENUE_MEAN: f64 = 45_000.0;
pub const REVENUE_STD_DEV: f64 = 15_000.0;
/// Lower bound applied to every sampled revenue.
pub const REVENUE_FLOOR: f64 = 10_000.0;

/// Product categories, in sampling order.
pub const CATEGORIES: [&str; 8] = [
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Sports",
    "Books",
    "Toys",
    "Health & Beauty",
    "Automotive",
];

pub const TITLE: &str = "Monthly Revenue by Product Category";
pub const X_LABEL: &str = "Revenue ($)";
pub const Y_LABEL: &str = "Product Category";

/// Font sizes in points; converted with [`pt_to_px`].
pub const TITLE_PT: f32 = 16.0;
pub const TITLE_PAD_PT: f32 = 20.0;
pub const AXIS_LABEL_PT: f32 = 13.0;
pub const TICK_LABEL_PT: f32 = 11.0 * FONT_SCALE;
pub const VALUE_LABEL_PT: f32 = 10.0;
pub const FONT_SCALE: f32 = 1.2;

/// Value labels start this many data units past the bar end.
pub const VALUE_LABEL_OFFSET: f64 = 1_000.0;
/// Fraction of a category band covered by its bar.
pub const BAR_THICKNESS: f32 = 0.8;
/// Relative data margin added past the largest value.
pub const VALUE_MARGIN: f64 = 0.05;
/// Saturation multiplier applied to palette colours before drawing bars.
pub const BAR_SATURATION: f32 = 0.75;

/// Convert a size in typographic points to pixels at `dpi`.
#[inline]
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / 72.0
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(120, 64, 48, 56)
    }
}
