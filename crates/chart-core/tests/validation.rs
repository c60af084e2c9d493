// File: crates/chart-core/tests/validation.rs
// Purpose: Malformed charts fail before anything touches the filesystem.

use chart_core::{render, Chart, ChartError, Headless, RenderOptions, Series};

const CLIENTS: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 10.0, 15.0];

#[test]
fn short_series_fails_and_writes_nothing() {
    let out = std::path::PathBuf::from("target/test_out/validation/short.png");
    let _ = std::fs::remove_file(&out);

    let chart = Chart::new("avg response time (rotate command)", &out)
        .with_x(CLIENTS)
        .with_series(Series::new("rotate_all", vec![1.026, 1.13, 1.71, 3.16, 6.64]));

    let err = render(&chart, &RenderOptions::default(), &mut Headless).unwrap_err();
    assert!(err.is_validation());
    match err {
        ChartError::LengthMismatch { chart, series, expected, actual } => {
            assert_eq!(chart, "avg response time (rotate command)");
            assert_eq!(series, "rotate_all");
            assert_eq!((expected, actual), (6, 5));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(!out.exists(), "no file may be written for an invalid chart");
}

#[test]
fn invalid_chart_leaves_previous_output_alone() {
    let out = std::path::PathBuf::from("target/test_out/validation/keep.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, b"previous").unwrap();

    let chart = Chart::new("mismatch", &out)
        .with_x(CLIENTS)
        .with_series(Series::new("cpu utilization", vec![1.0; 6]))
        .with_series(Series::new("disk utilization", vec![1.0; 7]));
    assert!(chart.render_to_png(&RenderOptions::default(), &out).is_err());
    assert_eq!(std::fs::read(&out).unwrap(), b"previous");
}

#[test]
fn error_message_names_chart_and_series() {
    let chart = Chart::new("utilization for rotate command at database", "unused.png")
        .with_x(CLIENTS)
        .with_series(Series::new("ram utilization", vec![62.3, 63.27]));
    let msg = chart.validate().unwrap_err().to_string();
    assert!(msg.contains("utilization for rotate command at database"), "{msg}");
    assert!(msg.contains("ram utilization"), "{msg}");
    assert!(msg.contains("2 values") && msg.contains("has 6"), "{msg}");
}

#[test]
fn nan_values_are_rejected() {
    let chart = Chart::new("nan", "unused.png")
        .with_x(CLIENTS)
        .with_series(Series::new("s", vec![1.0, f64::NAN, 1.0, 1.0, 1.0, 1.0]));
    assert!(matches!(chart.render_to_png_bytes(&RenderOptions::default()), Err(ChartError::NonFinite { index: 1, .. })));
}
