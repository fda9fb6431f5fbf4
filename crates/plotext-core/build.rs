// File: crates/plotext-core/build.rs
// Summary: Link the Windows system libraries Skia's font manager needs.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Build scripts run on the host; ask cargo for the target instead of cfg!.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW
        println!("cargo:rustc-link-lib=advapi32");
    }
}
