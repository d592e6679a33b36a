// File: crates/chart-core/tests/end_to_end.rs
// Purpose: Full pipeline writes an exact 512x512 white-background PNG and overwrites on re-run.

use chart_core::types::TARGET_PX;
use std::path::PathBuf;

fn out_path(name: &str) -> PathBuf {
    let p = PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(p.parent().unwrap()).unwrap();
    p
}

#[test]
fn produces_exact_size_png() {
    let out = out_path("e2e_chart.png");
    let report = chart_core::generate_chart(&out).expect("pipeline");
    assert_eq!(report.size, (TARGET_PX, TARGET_PX));
    assert_eq!(report.dataset.len(), 8);

    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0);

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decodes").to_rgb8();
    assert_eq!(img.dimensions(), (512, 512));

    for (x, y) in [(0, 0), (511, 0), (0, 511), (511, 511)] {
        assert_eq!(*img.get_pixel(x, y), image::Rgb([255, 255, 255]), "corner ({x},{y})");
    }
}

#[test]
fn rerun_overwrites_existing_file() {
    let out = out_path("e2e_rerun.png");
    std::fs::write(&out, b"stale, not a png").unwrap();

    chart_core::generate_chart(&out).expect("first run over stale file");
    let first = image::open(&out).expect("decode first").to_rgb8();
    chart_core::generate_chart(&out).expect("second run");
    let second = image::open(&out).expect("decode second").to_rgb8();

    assert_eq!(second.dimensions(), (512, 512));
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn unlabeled_render_resamples_too() {
    let out = out_path("e2e_unlabeled.png");
    let mut opts = chart_core::RenderOptions::default();
    opts.draw_labels = false;
    let report = chart_core::generate_chart_with(&out, &opts).expect("pipeline");
    assert_eq!(report.rendered, (512, 512));
    let img = image::open(&out).expect("decode");
    assert_eq!((img.width(), img.height()), (512, 512));
}
