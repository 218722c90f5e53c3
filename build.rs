//! Generates `build_info.rs` in OUT_DIR: commit, date and profile of this build.

use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Short commit hash. CI passes BUILD_COMMIT; local builds ask git.
fn commit() -> String {
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output();
    match output {
        Ok(out) if out.status.success() => {
            let hash = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if hash.is_empty() {
                "unknown".to_string()
            } else {
                hash
            }
        }
        _ => "unknown".to_string(),
    }
}

fn build_date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\npub const BUILD_PROFILE: &str = {:?};\n",
        commit(),
        build_date(),
        profile
    );

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        panic!("OUT_DIR is not set; build.rs must run under cargo");
    };
    if let Err(err) = std::fs::write(out_dir.join("build_info.rs"), generated) {
        panic!("cannot write build_info.rs: {err}");
    }

    for var in ["BUILD_COMMIT", "BUILD_DATE"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
}
