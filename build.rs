use std::process::Command;

fn main() {
    // FLIP_TIMER_VERSION: release tooling can pin the version at build time.
    // Falls back to CARGO_PKG_VERSION (from Cargo.toml) for local builds.
    let version = std::env::var("FLIP_TIMER_VERSION")
        .unwrap_or_else(|_| std::env::var("CARGO_PKG_VERSION").unwrap_or_default());
    println!("cargo:rustc-env=FLIP_TIMER_VERSION={version}");

    // FLIP_TIMER_COMMIT: falls back to `git rev-parse --short HEAD`.
    let commit = std::env::var("FLIP_TIMER_COMMIT").unwrap_or_else(|_| {
        match Command::new("git").args(["rev-parse", "--short", "HEAD"]).output() {
            Ok(o) if o.status.success() => String::from_utf8_lossy(&o.stdout).trim().to_string(),
            _ => "unknown".to_string(),
        }
    });
    println!("cargo:rustc-env=FLIP_TIMER_COMMIT={commit}");

    println!("cargo:rerun-if-env-changed=FLIP_TIMER_VERSION");
    println!("cargo:rerun-if-env-changed=FLIP_TIMER_COMMIT");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
