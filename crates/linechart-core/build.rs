// File: crates/linechart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    // Build scripts run on the host; ask cargo about the target instead of using cfg!.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW and friends, pulled in by Skia's DirectWrite font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
