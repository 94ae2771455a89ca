//! Stamps `SOUNDEX_GIT_HASH`, `SOUNDEX_BUILD_PROFILE` and
//! `SOUNDEX_BUILD_TIMESTAMP` into the crate for `build_info`.

use std::process::Command;

fn set(key: &str, value: &str) {
    println!("cargo:rustc-env=SOUNDEX_{key}={value}");
}

fn main() {
    // Builds from a source tarball have no .git; report "unknown" there.
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    set("GIT_HASH", &git_hash);

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    set("BUILD_PROFILE", &profile);

    let built_at = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    set("BUILD_TIMESTAMP", &built_at.to_string());

    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs");
}
