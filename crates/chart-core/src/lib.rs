// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the revenue dataset, bar chart rendering and PNG resampling.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod pipeline;
pub mod resample;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{CategoryAxis, ValueAxis};
pub use chart::{Bar, BarChart, RenderOptions};
pub use dataset::{CategoryRevenueRow, Dataset};
pub use error::{ChartError, Result};
pub use pipeline::{generate_chart, generate_chart_with, ChartReport};
pub use resample::resample_png_in_place;
pub use text::TextShaper;
pub use theme::Theme;
