// File: crates/chart-core/src/pipeline.rs
// Summary: End-to-end chart generation: dataset -> bar chart -> PNG render -> exact resample.

use std::path::{Path, PathBuf};

use crate::chart::{BarChart, RenderOptions};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::resample::resample_png_in_place;
use crate::types::TARGET_PX;

/// What a finished run produced.
#[derive(Clone, Debug)]
pub struct ChartReport {
    pub path: PathBuf,
    pub dataset: Dataset,
    /// Size of the initial render before resampling.
    pub rendered: (u32, u32),
    /// Final size on disk.
    pub size: (u32, u32),
}

/// Generate the revenue dataset, render it to `output`, then resample the file
/// in place to exactly `TARGET_PX` x `TARGET_PX`. Any existing file is overwritten.
pub fn generate_chart(output: impl AsRef<Path>) -> Result<ChartReport> {
    generate_chart_with(output, &RenderOptions::default())
}

pub fn generate_chart_with(output: impl AsRef<Path>, opts: &RenderOptions) -> Result<ChartReport> {
    let path = output.as_ref();

    let dataset = Dataset::generate()?;
    for row in &dataset {
        log::debug!("{:<16} {:>8}", row.category, row.revenue);
    }

    let chart = BarChart::from_dataset(&dataset);
    chart.render_to_png(opts, path)?;
    let rendered = resample_png_in_place(path, TARGET_PX, TARGET_PX)?;

    Ok(ChartReport {
        path: path.to_path_buf(),
        dataset,
        rendered,
        size: (TARGET_PX, TARGET_PX),
    })
}
