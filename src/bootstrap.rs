//! Fetching the probe binary for the host architecture.

use log::{debug, info};
use reqwest::header::{HeaderMap, USER_AGENT};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{to_app_error, AppError};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Release directory the probe binaries are published under.
pub static DEFAULT_DOWNLOAD_URL: &str =
    "https://github.com/BenchIM/bim-core/releases/latest/download";

/// File name the downloaded binary is saved as.
pub static BINARY_NAME: &str = "bimc";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Release asset name for a Rust target architecture.
pub fn asset_name(arch: &str) -> Option<String> {
    let target = match arch {
        "x86_64" => "x86_64-unknown-linux-musl",
        "aarch64" => "aarch64-unknown-linux-musl",
        "x86" => "i686-unknown-linux-musl",
        "arm" => "armv7-unknown-linux-musleabihf",
        _ => return None,
    };

    Some(format!("{}-{}", BINARY_NAME, target))
}

/// Full download URL for `arch` under `base`.
pub fn asset_url(base: &str, arch: &str) -> Result<String, AppError> {
    let asset = asset_name(arch).ok_or_else(|| {
        AppError::bootstrap(format!("unsupported architecture `{}`", arch))
    })?;

    Ok(format!("{}/{}", base.trim_end_matches('/'), asset))
}

fn headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    if let Ok(value) = format!("{}/{} ({})", NAME, VERSION, REPO).parse() {
        headers.insert(USER_AGENT, value);
    }

    headers
}

/// The probe binary in use, removed on drop when it was downloaded by us
/// and not asked to be kept.
#[derive(Debug)]
pub struct InstalledBinary {
    path: PathBuf,
    remove_on_drop: bool,
}

impl InstalledBinary {
    pub fn existing(path: impl Into<PathBuf>) -> Self {
        Self::new(path, false)
    }

    pub(crate) fn new(path: impl Into<PathBuf>, remove_on_drop: bool) -> Self {
        Self { path: path.into(), remove_on_drop }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for InstalledBinary {
    fn drop(&mut self) {
        if self.remove_on_drop {
            debug!("Removing {}", self.path.display());
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Download the binary for the running architecture into `dir`.
pub async fn install(
    base_url: &str,
    dir: &Path,
    keep: bool,
) -> Result<InstalledBinary, AppError> {
    let url = asset_url(base_url, std::env::consts::ARCH)?;
    let path = dir.join(BINARY_NAME);

    info!("Downloading probe binary from {}", url);

    let client = Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .default_headers(headers())
        .build()
        .map_err(|e| to_app_error(Box::new(e), "building HTTP client"))?;

    let bytes = client
        .get(&url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| to_app_error(Box::new(e), "downloading probe binary"))?
        .bytes()
        .await
        .map_err(|e| to_app_error(Box::new(e), "reading probe binary"))?;

    if bytes.is_empty() {
        return Err(AppError::bootstrap(format!("{} returned no data", url)));
    }

    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| to_app_error(Box::new(e), "writing probe binary"))?;
    make_executable(&path)?;

    debug!("Saved {} bytes to {}", bytes.len(), path.display());

    Ok(InstalledBinary::new(path, !keep))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .map_err(|e| to_app_error(Box::new(e), "marking probe binary executable"))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), AppError> {
    Ok(())
}
