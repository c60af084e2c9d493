// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{render, Chart, Headless, RenderOptions, Series};

fn rotate_chart(out: &std::path::Path) -> Chart {
    Chart::new("avg throughput (rotate command)", out)
        .with_x(vec![1.0, 2.0, 3.0, 4.0, 10.0, 15.0])
        .with_labels("num clients", "avg throughput (req/s)")
        .with_series(Series::new("rotate_all", vec![761.29, 1276.0, 1393.0, 1316.19, 1333.0, 1362.0]))
}

#[test]
fn render_smoke_png() {
    let out = std::path::PathBuf::from("target/test_out/smoke/avg_thp_rotate.png");
    let _ = std::fs::remove_file(&out);
    let chart = rotate_chart(&out);

    let opts = RenderOptions::default();
    let report = render(&chart, &opts, &mut Headless).expect("render should succeed");
    assert_eq!(report.path, out);
    assert_eq!((report.width, report.height), (1024, 640));

    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
    assert_eq!(meta.len(), report.bytes);

    let bytes = std::fs::read(&out).expect("read png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (1024, 640));
}

#[test]
fn render_rgba8_buffer() {
    let chart = rotate_chart(std::path::Path::new("unused.png"));
    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque white background (RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn file_names_with_spaces_are_kept() {
    let out = std::path::PathBuf::from("target/test_out/smoke/utilization for rotate command at database.png");
    let _ = std::fs::remove_file(&out);
    let chart = Chart::new("utilization for rotate command at database", &out)
        .with_x(vec![1.0, 2.0, 3.0, 4.0, 10.0, 15.0])
        .with_series(Series::new("cpu utilization", vec![30.21, 46.21, 46.79, 47.25, 49.37, 50.22]));
    chart.render_to_png(&RenderOptions::default(), &out).expect("render");
    assert!(out.exists());
}

#[test]
fn unwritable_path_is_io_error() {
    // a regular file cannot act as a parent directory
    let blocker = std::path::PathBuf::from("target/test_out/smoke/blocker");
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    std::fs::write(&blocker, b"x").unwrap();

    let out = blocker.join("chart.png");
    let chart = rotate_chart(&out);
    let err = render(&chart, &RenderOptions::default(), &mut Headless).unwrap_err();
    assert!(matches!(err, chart_core::ChartError::Io { .. }), "got {err:?}");
    assert!(!err.is_validation());
}
