// File: crates/bench-plots/tests/chart_book.rs
// Purpose: Chart books load inline and CSV-backed charts and report bad definitions.

use std::path::Path;

use bench_plots::{plan, render_all, ChartBook, ConfigError};
use chart_core::{ChartError, Headless};

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).expect("write fixture");
    path
}

#[test]
fn csv_chart_renders() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "util.csv",
        "clients, cpu utilization, disk utilization, ram utilization\n\
         1, 30.21, 0.052, 62.3\n\
         2, 46.21, 0.0066, 63.27\n\
         3, 46.79, 0.014, 63.4\n",
    );
    let book_path = write(
        dir.path(),
        "book.toml",
        r#"
        output_dir = "out"
        include_builtin = false
        show = false
        width = 400
        height = 300

        [[chart]]
        title = "utilization from csv"
        x_label = "num clients"
        y_label = "percentage utilization"
        output = "util.png"
        legend = "lower right"
        csv = "util.csv"
        "#,
    );

    let book = ChartBook::load(&book_path).expect("load book");
    let charts = plan(&book).expect("plan");
    assert_eq!(charts.len(), 1);
    let names: Vec<_> = charts[0].series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["cpu utilization", "disk utilization", "ram utilization"]);
    assert_eq!(charts[0].x, vec![1.0, 2.0, 3.0]);

    // output_dir is taken as written, relative to the working directory
    let mut chart = charts[0].clone();
    chart.output = dir.path().join("out/util.png");
    render_all(&[chart], &book.render_options(), &mut Headless).expect("render");
    assert!(dir.path().join("out/util.png").exists());
}

#[test]
fn non_numeric_csv_cell_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "bad.csv", "clients,cpu\n1,30.2\n2,n/a\n");
    let book_path = write(
        dir.path(),
        "book.toml",
        "include_builtin = false\n[[chart]]\ntitle = \"bad\"\noutput = \"bad.png\"\ncsv = \"bad.csv\"\n",
    );
    let book = ChartBook::load(&book_path).expect("load book");
    let err = plan(&book).unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, ConfigError::Definition { .. }), "{msg}");
    assert!(msg.contains("row 2") && msg.contains("n/a"), "{msg}");
}

#[test]
fn missing_csv_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let book_path = write(
        dir.path(),
        "book.toml",
        "include_builtin = false\n[[chart]]\ntitle = \"gone\"\noutput = \"gone.png\"\ncsv = \"nope.csv\"\n",
    );
    let book = ChartBook::load(&book_path).expect("load book");
    assert!(matches!(plan(&book), Err(ConfigError::Csv { .. })));
}

#[test]
fn malformed_toml_names_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let book_path = write(dir.path(), "broken.toml", "[[chart]\n");
    let err = ChartBook::load(&book_path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn duplicate_outputs_rejected() {
    let book = ChartBook::from_toml_str(
        r#"
        [[chart]]
        title = "clash"
        output = "avg_thp_rotate.png"
        x = [1, 2]
        series = [{ name = "s", values = [1, 2] }]
        "#,
        ".",
    )
    .unwrap();
    match plan(&book) {
        Err(ConfigError::DuplicateOutput { path }) => assert!(path.ends_with("avg_thp_rotate.png")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn mismatched_series_aborts_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("plots");
    // literal TOML string: no escaping of Windows separators
    let book_path = write(
        dir.path(),
        "book.toml",
        &format!(
            r#"
            output_dir = '{}'
            show = false

            [[chart]]
            title = "avg throughput (rotate command)"
            output = "short.png"
            x = [1, 2, 3, 4, 10, 15]
            series = [{{ name = "rotate_all", values = [761.29, 1276, 1393, 1316.19, 1333] }}]
            "#,
            out.display()
        ),
    );

    let book = ChartBook::load(&book_path).expect("load book");
    assert!(book.include_builtin);
    match plan(&book) {
        Err(ConfigError::Chart { chart, source }) => {
            assert_eq!(chart, "avg throughput (rotate command)");
            assert!(source.to_string().contains("rotate_all"), "{source}");
        }
        other => panic!("unexpected {other:?}"),
    }

    let err = bench_plots::run(Some(book_path.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("rotate_all"), "{err:#}");
    assert!(!out.exists(), "built-in charts must not be written when the book is invalid");
}

#[test]
fn header_only_csv_is_rejected_up_front() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "empty.csv", "clients,cpu\n");
    let book_path = write(
        dir.path(),
        "book.toml",
        "show = false\n[[chart]]\ntitle = \"empty\"\noutput = \"empty.png\"\ncsv = \"empty.csv\"\n",
    );
    let book = ChartBook::load(&book_path).expect("load book");
    match plan(&book) {
        Err(ConfigError::Chart { source, .. }) => assert!(matches!(source, ChartError::EmptyAxis { .. })),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn dot_segments_do_not_dodge_duplicate_check() {
    let book = ChartBook::from_toml_str(
        r#"
        [[chart]]
        title = "sneaky"
        output = "recorded/../avg_thp_rotate.png"
        x = [1, 2]
        series = [{ name = "s", values = [1, 2] }]
        "#,
        ".",
    )
    .unwrap();
    match plan(&book) {
        Err(ConfigError::DuplicateOutput { path }) => {
            assert_eq!(path, Path::new(".").join("recorded/../avg_thp_rotate.png"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn shipped_example_book_plans() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../books/example.toml");
    let book = ChartBook::load(&path).expect("example book loads");
    assert!(!book.show);
    let charts = plan(&book).expect("example book plans");
    let extra = &charts[charts.len() - 2..];
    assert_eq!(extra[0].series.len(), 2);
    assert_eq!(extra[1].series.len(), 4);
    assert_eq!(extra[1].y_axis.limits, Some((0.0, 100.0)));
    assert!(extra[1].output.ends_with("server cpu by command.png"));
    for chart in &charts {
        chart.validate().unwrap_or_else(|e| panic!("{e}"));
    }
}
