// File: crates/chart-core/build.rs
// Summary: Build script linking the Windows system libraries Skia/ICU need.

fn main() {
    // Build scripts run on the host; ask Cargo for the target instead of using #[cfg].
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
