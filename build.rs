fn main() {
    set_version_string();
}

/// Make the package version, with the short git hash when available,
/// visible to the build as `BIMSPEED_VERSION`.
fn set_version_string() {
    let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();

    let version = match git_revision_hash() {
        Some(rev) => format!("{} (rev {})", version, rev),
        None => version,
    };
    println!("cargo:rustc-env=BIMSPEED_VERSION={}", version);
}

fn git_revision_hash() -> Option<String> {
    use std::process::Command;

    let args = &["rev-parse", "--short=10", "HEAD"];
    let output = Command::new("git").args(args).output().ok()?;
    let rev = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if rev.is_empty() {
        return None;
    }
    Some(rev)
}
