// File: crates/bench-plots/tests/builtin_charts.rs
// Purpose: The built-in catalog renders end to end, keeping the legacy file names.

use bench_plots::{plan, render_all, ChartBook};
use chart_core::Headless;

#[test]
fn builtin_catalog_writes_every_chart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let book = ChartBook {
        output_dir: dir.path().to_path_buf(),
        show: false,
        width: 480,
        height: 320,
        ..ChartBook::default()
    };

    let charts = plan(&book).expect("plan");
    let reports = render_all(&charts, &book.render_options(), &mut Headless).expect("render all");
    assert_eq!(reports.len(), charts.len());

    for name in [
        "avg_thp_rotate.png",
        "avg_resptime_rotate.png",
        "utilization for rotate command at database.png",
    ] {
        let path = dir.path().join(name);
        let len = std::fs::metadata(&path).unwrap_or_else(|_| panic!("missing {name}")).len();
        assert!(len > 0, "{name} is empty");
    }

    let recorded = std::fs::read_dir(dir.path().join("recorded")).expect("recorded dir").count();
    assert_eq!(recorded, 16);
    assert!(dir.path().join("recorded/utilization for delete command at server.png").exists());
    assert!(reports.iter().all(|r| (r.width, r.height) == (480, 320)));
}

#[test]
fn rendering_in_order_follows_plan() {
    let dir = tempfile::tempdir().expect("tempdir");
    let book = ChartBook { output_dir: dir.path().to_path_buf(), show: false, width: 200, height: 140, ..ChartBook::default() };
    let charts = plan(&book).expect("plan");
    let reports = render_all(&charts, &book.render_options(), &mut Headless).expect("render all");
    let planned: Vec<_> = charts.iter().map(|c| c.output.clone()).collect();
    let written: Vec<_> = reports.iter().map(|r| r.path.clone()).collect();
    assert_eq!(planned, written);
}
