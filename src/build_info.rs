//! Build metadata generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Line printed by `tower-rpg --version`.
pub fn version_line() -> String {
    let mut line = format!(
        "tower-rpg {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    );
    if BUILD_PROFILE != "release" {
        line.push_str(" [");
        line.push_str(BUILD_PROFILE);
        line.push(']');
    }
    line
}
