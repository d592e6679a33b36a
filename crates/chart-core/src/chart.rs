// File: crates/chart-core/src/chart.rs
// Summary: Horizontal bar chart and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::{CategoryAxis, ValueAxis};
use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::format;
use crate::geometry::RectI32;
use crate::scale::{BandScale, ValueScale};
use crate::text::{Anchor, FontWeight, TextShaper};
use crate::theme::{desaturate, viridis_palette, Theme};
use crate::types::{
    pt_to_px, Insets, AXIS_LABEL_PT, BAR_SATURATION, BAR_THICKNESS, DPI, HEIGHT, TICK_LABEL_PT,
    TITLE, TITLE_PAD_PT, TITLE_PT, VALUE_LABEL_OFFSET, VALUE_LABEL_PT, VALUE_MARGIN, WIDTH, X_LABEL,
    Y_LABEL,
};

// Outer whitespace and gaps between stacked text blocks, in pixels.
const MARGIN_PX: f32 = 6.0;
const GAP_PX: f32 = 4.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub dpi: f32,
    /// Used as-is when `draw_labels` is false; otherwise margins are fitted to the text.
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            dpi: DPI,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: skia::Color,
}

/// Bars are stacked bottom-up: `bars[0]` sits nearest the origin.
pub struct BarChart {
    pub title: String,
    pub x_axis: ValueAxis,
    pub y_axis: CategoryAxis,
    pub bars: Vec<Bar>,
}

/// Resolved pixel geometry for one render.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub plot: RectI32,
    pub x: ValueScale,
    pub y: BandScale,
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_axis: ValueAxis::new(X_LABEL, 0.0, 1.0),
            y_axis: CategoryAxis::new(Y_LABEL),
            bars: Vec::new(),
        }
    }

    /// Revenue chart: one bar per row in dataset order, viridis colours at
    /// bar saturation, value axis from zero with a 5% margin.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut chart = Self::new(TITLE);
        let palette = viridis_palette(dataset.len());
        for (row, color) in dataset.iter().zip(palette) {
            chart.add_bar(row.category, row.revenue, desaturate(color, BAR_SATURATION));
        }
        chart.x_axis = ValueAxis::from_zero(X_LABEL, dataset.max_revenue(), VALUE_MARGIN);
        chart
    }

    pub fn add_bar(&mut self, label: impl Into<String>, value: f64, color: skia::Color) {
        self.bars.push(Bar { label: label.into(), value, color });
    }

    /// Compute the plot rectangle and scales for `opts`.
    pub fn layout(&self, opts: &RenderOptions, shaper: Option<&TextShaper>) -> Layout {
        let plot = match shaper {
            Some(shaper) if opts.draw_labels => self.fit_plot_rect(opts, shaper),
            _ => RectI32::inset(opts.width, opts.height, &opts.insets),
        };
        let x = ValueScale::new(plot.left as f32, plot.right as f32, self.x_axis.min, self.x_axis.max);
        let y = BandScale::new(plot.top as f32, plot.bottom as f32, self.bars.len());
        Layout { plot, x, y }
    }

    fn fit_plot_rect(&self, opts: &RenderOptions, shaper: &TextShaper) -> RectI32 {
        let px = |pt: f32| pt_to_px(pt, opts.dpi);
        let (w, h) = (opts.width as f32, opts.height as f32);

        let (_, title_h) = shaper.measure(&self.title, px(TITLE_PT), FontWeight::Bold);
        let (_, xlabel_h) = shaper.measure(&self.x_axis.label, px(AXIS_LABEL_PT), FontWeight::SemiBold);
        let (_, ylabel_h) = shaper.measure(&self.y_axis.label, px(AXIS_LABEL_PT), FontWeight::SemiBold);
        let (_, tick_h) = shaper.measure("0", px(TICK_LABEL_PT), FontWeight::Regular);
        let cat_w = self
            .bars
            .iter()
            .map(|b| shaper.measure_width(&b.label, px(TICK_LABEL_PT), FontWeight::Regular))
            .fold(0.0, f32::max);
        let value_w = self
            .bars
            .iter()
            .map(|b| shaper.measure_width(&format::currency(b.value), px(VALUE_LABEL_PT), FontWeight::SemiBold))
            .fold(0.0, f32::max);

        let top = MARGIN_PX + title_h + px(TITLE_PAD_PT);
        let bottom = h - (MARGIN_PX + xlabel_h + GAP_PX + tick_h + GAP_PX);
        let left = MARGIN_PX + ylabel_h + GAP_PX + cat_w + GAP_PX;

        // Shrink the plot so the label past the longest bar still fits.
        let max_value = self.bars.iter().map(|b| b.value).fold(0.0, f64::max);
        let span = (self.x_axis.max - self.x_axis.min).max(1e-9);
        let reach = (((max_value + VALUE_LABEL_OFFSET) - self.x_axis.min) / span).max(1e-6) as f32;
        let limit = w - MARGIN_PX;
        let right = limit.min(left + (limit - value_w - left) / reach);

        RectI32::from_ltrb(left.ceil() as i32, top.ceil() as i32, right.floor() as i32, bottom.floor() as i32)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        log::info!("wrote {}x{} render to {} ({} bytes)", opts.width, opts.height, path.display(), bytes.len());
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts);

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart and return `(pixels, width, height, stride)` as unpremultiplied RGBA8.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts);

        let stride = opts.width as usize * 4;
        let mut px = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((px, opts.width as u32, opts.height as u32, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let shaper = opts.draw_labels.then(TextShaper::new);
        let layout = self.layout(opts, shaper.as_ref());
        let ticks = self.x_axis.ticks();

        // Grid sits below the bars
        draw_grid(canvas, &layout, &ticks, theme);
        draw_bars(canvas, &layout, &self.bars);
        draw_spines(canvas, &layout.plot, theme);

        if let Some(shaper) = &shaper {
            self.draw_labels(canvas, shaper, &layout, &ticks, opts);
        }
    }

    fn draw_labels(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        layout: &Layout,
        ticks: &[f64],
        opts: &RenderOptions,
    ) {
        let theme = &opts.theme;
        let px = |pt: f32| pt_to_px(pt, opts.dpi);
        let plot = &layout.plot;
        let tick_px = px(TICK_LABEL_PT);

        // Value ticks
        let (_, tick_h) = shaper.measure("0", tick_px, FontWeight::Regular);
        let tick_cy = plot.bottom as f32 + GAP_PX + tick_h * 0.5;
        for &t in ticks {
            let x = layout.x.to_px(t);
            shaper.draw(canvas, &format::tick(t), x, tick_cy, tick_px, theme.tick, FontWeight::Regular, Anchor::Center);
        }

        // Category names and per-bar value labels
        for (i, bar) in self.bars.iter().enumerate() {
            let cy = layout.y.center(i);
            shaper.draw(canvas, &bar.label, plot.left as f32 - GAP_PX, cy, tick_px, theme.tick, FontWeight::Regular, Anchor::Right);
            let x = layout.x.to_px(bar.value + VALUE_LABEL_OFFSET);
            shaper.draw(
                canvas,
                &format::currency(bar.value),
                x,
                cy,
                px(VALUE_LABEL_PT),
                theme.value_label,
                FontWeight::SemiBold,
                Anchor::Left,
            );
        }

        // Axis labels
        let label_px = px(AXIS_LABEL_PT);
        let (_, xlabel_h) = shaper.measure(&self.x_axis.label, label_px, FontWeight::SemiBold);
        let plot_cx = (plot.left + plot.right) as f32 * 0.5;
        let xlabel_cy = plot.bottom as f32 + GAP_PX + tick_h + GAP_PX + xlabel_h * 0.5;
        shaper.draw(canvas, &self.x_axis.label, plot_cx, xlabel_cy, label_px, theme.axis_label, FontWeight::SemiBold, Anchor::Center);

        let (_, ylabel_h) = shaper.measure(&self.y_axis.label, label_px, FontWeight::SemiBold);
        let plot_cy = (plot.top + plot.bottom) as f32 * 0.5;
        shaper.draw_vertical(canvas, &self.y_axis.label, MARGIN_PX + ylabel_h * 0.5, plot_cy, label_px, theme.axis_label, FontWeight::SemiBold);

        // Title above the plot area
        let title_px = px(TITLE_PT);
        let (_, title_h) = shaper.measure(&self.title, title_px, FontWeight::Bold);
        let title_cy = plot.top as f32 - px(TITLE_PAD_PT) - title_h * 0.5;
        shaper.draw(canvas, &self.title, plot_cx, title_cy, title_px, theme.title, FontWeight::Bold, Anchor::Center);
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, layout: &Layout, ticks: &[f64], theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_alpha_f(theme.grid_alpha);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_path_effect(skia::PathEffect::dash(&[4.0, 2.0], 0.0));

    // verticals only: the value axis is horizontal
    let (t, b) = (layout.plot.top as f32, layout.plot.bottom as f32);
    for &v in ticks {
        let x = layout.x.to_px(v);
        canvas.draw_line((x, t), (x, b), &paint);
    }
}

fn draw_bars(canvas: &skia::Canvas, layout: &Layout, bars: &[Bar]) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    let x0 = layout.x.to_px(0.0_f64.max(layout.x.vmin));
    for (i, bar) in bars.iter().enumerate() {
        let (top, bottom) = layout.y.bar_span(i, BAR_THICKNESS);
        let x1 = layout.x.to_px(bar.value);
        body.set_color(bar.color);
        canvas.draw_rect(skia::Rect::from_ltrb(x0.min(x1), top, x0.max(x1), bottom), &body);
    }
}

/// Left and bottom spines; top and right stay hidden.
fn draw_spines(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.spine);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.25);

    let (l, t, b) = (plot.left as f32, plot.top as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (plot.right as f32, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> BarChart {
        BarChart::from_dataset(&Dataset::generate().unwrap())
    }

    #[test]
    fn bars_follow_dataset_order() {
        let ds = Dataset::generate().unwrap();
        let c = BarChart::from_dataset(&ds);
        let labels: Vec<&str> = c.bars.iter().map(|b| b.label.as_str()).collect();
        let expected: Vec<&str> = ds.iter().map(|r| r.category).collect();
        assert_eq!(labels, expected);
        assert!(c.bars.windows(2).all(|w| w[0].value <= w[1].value));
    }

    #[test]
    fn value_axis_has_margin() {
        let c = chart();
        let max = c.bars.iter().map(|b| b.value).fold(0.0, f64::max);
        assert_eq!(c.x_axis.min, 0.0);
        assert!((c.x_axis.max - max * (1.0 + VALUE_MARGIN)).abs() < 1e-6);
    }

    #[test]
    fn smallest_bar_is_lowest_on_screen() {
        let c = chart();
        let mut opts = RenderOptions::default();
        opts.draw_labels = false;
        let layout = c.layout(&opts, None);
        let first = layout.y.center(0);
        let last = layout.y.center(c.bars.len() - 1);
        assert!(first > last, "band 0 should be drawn nearest the x axis");
    }

    #[test]
    fn unlabeled_layout_uses_insets() {
        let c = chart();
        let mut opts = RenderOptions::default();
        opts.draw_labels = false;
        let layout = c.layout(&opts, None);
        assert_eq!(layout.plot, RectI32::inset(opts.width, opts.height, &opts.insets));
    }
}
