// File: crates/chart-gen/src/main.rs
// Summary: Renders the monthly revenue bar chart to chart.png (exactly 512x512) in the working directory.

use anyhow::{Context, Result};
use chart_core::types::{OUTPUT_FILE, TARGET_PX};

fn main() -> Result<()> {
    init_logger();

    let report = chart_core::generate_chart(OUTPUT_FILE)
        .with_context(|| format!("failed to generate {OUTPUT_FILE}"))?;
    log::info!(
        "{} categories, initial render {}x{}",
        report.dataset.len(),
        report.rendered.0,
        report.rendered.1
    );

    println!("Chart saved as {} (exactly {TARGET_PX}x{TARGET_PX} pixels)", report.path.display());
    Ok(())
}

fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
