// File: crates/bench-plots/src/main.rs
// Summary: Renders the benchmark charts to PNGs; an optional argument names a TOML chart book.

use anyhow::Result;
use std::path::PathBuf;

fn main() -> Result<()> {
    bench_plots::logger::init_cli_logger();

    let book = std::env::args_os().nth(1).map(PathBuf::from);
    if let Some(path) = &book {
        tracing::info!("Using chart book: {}", path.display());
    }

    let reports = bench_plots::run(book.as_deref())?;
    tracing::info!("Wrote {} charts", reports.len());
    Ok(())
}
