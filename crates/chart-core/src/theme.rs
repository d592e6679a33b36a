// File: crates/chart-core/src/theme.rs
// Summary: White chart theming and the viridis sequential palette used for bars.

use skia_safe as skia;

use crate::grid::linspace;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    /// Gridline opacity in [0, 1].
    pub grid_alpha: f32,
    pub spine: skia::Color,
    pub title: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub value_label: skia::Color,
}

impl Theme {
    /// White figure, light grey dashed grid, `#cccccc` spines, near-black text.
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            grid_alpha: 0.3,
            spine: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            title: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            axis_label: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            value_label: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::whitegrid() }
}

// viridis sampled every 1/8 of its range
const VIRIDIS: [(u8, u8, u8); 9] = [
    (0x44, 0x01, 0x54),
    (0x47, 0x2c, 0x7a),
    (0x3b, 0x52, 0x8b),
    (0x2c, 0x72, 0x8e),
    (0x21, 0x91, 0x8c),
    (0x28, 0xae, 0x80),
    (0x5e, 0xc9, 0x62),
    (0xad, 0xdc, 0x30),
    (0xfd, 0xe7, 0x25),
];

/// Look up viridis at `t` in [0, 1] by linear interpolation between stops.
pub fn viridis(t: f64) -> skia::Color {
    let t = t.clamp(0.0, 1.0);
    let pos = t * (VIRIDIS.len() - 1) as f64;
    let i = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    let f = pos - i as f64;
    let (r0, g0, b0) = VIRIDIS[i];
    let (r1, g1, b1) = VIRIDIS[i + 1];
    let lerp = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * f).round() as u8 };
    skia::Color::from_argb(255, lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// `n` viridis colours taken from the interior of the map, skipping both ends.
pub fn viridis_palette(n: usize) -> Vec<skia::Color> {
    if n == 0 {
        return Vec::new();
    }
    let stops = linspace(0.0, 1.0, n + 2);
    stops[1..=n].iter().map(|&t| viridis(t)).collect()
}

/// Scale the HLS saturation of `color` by `prop`, keeping hue and lightness.
pub fn desaturate(color: skia::Color, prop: f32) -> skia::Color {
    let (h, l, s) = rgb_to_hls(color.r(), color.g(), color.b());
    let (r, g, b) = hls_to_rgb(h, l, (s * prop).clamp(0.0, 1.0));
    skia::Color::from_argb(color.a(), r, g, b)
}

fn rgb_to_hls(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if (max - min).abs() < f32::EPSILON {
        return (0.0, l, 0.0);
    }
    let d = max - min;
    let s = if l <= 0.5 { d / (max + min) } else { d / (2.0 - max - min) };
    let h = if max == r {
        (g - b) / d
    } else if max == g {
        2.0 + (b - r) / d
    } else {
        4.0 + (r - g) / d
    };
    ((h / 6.0).rem_euclid(1.0), l, s)
}

fn hls_to_rgb(h: f32, l: f32, s: f32) -> (u8, u8, u8) {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    if s == 0.0 {
        return (to_u8(l), to_u8(l), to_u8(l));
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    let channel = |hue: f32| -> f32 {
        let hue = hue.rem_euclid(1.0);
        if hue < 1.0 / 6.0 {
            m1 + (m2 - m1) * hue * 6.0
        } else if hue < 0.5 {
            m2
        } else if hue < 2.0 / 3.0 {
            m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
        } else {
            m1
        }
    };
    (to_u8(channel(h + 1.0 / 3.0)), to_u8(channel(h)), to_u8(channel(h - 1.0 / 3.0)))
}
