//! Invocation of the external measurement binary.
//!
//! The binary does all of the measuring. This module only builds its
//! argument list, runs it to completion and hands back whatever it printed.

use log::{debug, warn};
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::catalog::{Family, Locators};

/// Connection count used inside a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadMode {
    Single,
    Eight,
}

impl ThreadMode {
    pub fn label(&self) -> &'static str {
        match self {
            ThreadMode::Single => "单线程",
            ThreadMode::Eight => "八线程",
        }
    }

    fn flag(&self) -> Option<&'static str> {
        match self {
            ThreadMode::Single => None,
            ThreadMode::Eight => Some("-m"),
        }
    }
}

impl Family {
    fn flag(&self) -> Option<&'static str> {
        match self {
            // The binary measures over IPv4 unless told otherwise
            Family::Ipv4 => None,
            Family::Ipv6 => Some("-6"),
        }
    }
}

/// Per-call options for a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOptions {
    pub threads: ThreadMode,
    pub family: Option<Family>,
}

/// Something that can run a measurement against one endpoint.
pub trait Probe {
    /// Resolve the padded display name for a location label.
    async fn display_name(&self, location: &str) -> String;

    /// Run one measurement and return its raw output, which may be empty.
    async fn measure(&self, locators: &Locators, options: ProbeOptions)
        -> String;
}

impl<T: Probe> Probe for &T {
    async fn display_name(&self, location: &str) -> String {
        (**self).display_name(location).await
    }

    async fn measure(
        &self,
        locators: &Locators,
        options: ProbeOptions,
    ) -> String {
        (**self).measure(locators, options).await
    }
}

/// Arguments for a measurement call: download and upload locators, then the
/// protocol flag, then the thread flag.
pub fn measure_args(locators: &Locators, options: ProbeOptions) -> Vec<String> {
    let mut args = vec![locators.download.clone(), locators.upload.clone()];

    if let Some(flag) = options.family.and_then(|family| family.flag()) {
        args.push(flag.to_string());
    }
    if let Some(flag) = options.threads.flag() {
        args.push(flag.to_string());
    }

    args
}

/// Arguments for a name lookup call.
pub fn name_args(location: &str) -> Vec<String> {
    vec!["-n".to_string(), location.to_string()]
}

/// Runs the downloaded probe binary as a child process.
#[derive(Debug, Clone)]
pub struct BinaryProbe {
    program: PathBuf,
}

impl BinaryProbe {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run the binary and capture stdout. Failures are logged and yield
    /// whatever was captured, so they surface as abnormal results.
    async fn run(&self, args: &[String]) -> String {
        debug!("Running {} {}", self.program.display(), args.join(" "));

        let output = match Command::new(&self.program).args(args).output().await
        {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to run {}: {}", self.program.display(), e);
                return String::new();
            }
        };

        if !output.status.success() {
            warn!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("Probe output: {:?}", stdout);

        stdout
    }
}

impl Probe for BinaryProbe {
    async fn display_name(&self, location: &str) -> String {
        let name = self.run(&name_args(location)).await;
        let name = name.trim_end_matches(['\r', '\n']);

        if name.trim().is_empty() {
            warn!("Name lookup for {} returned nothing", location);
            return location.to_string();
        }

        name.to_string()
    }

    async fn measure(
        &self,
        locators: &Locators,
        options: ProbeOptions,
    ) -> String {
        self.run(&measure_args(locators, options)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locators() -> Locators {
        Locators {
            download: "http://dl.example:8080/file.jpg".to_string(),
            upload: "http://ul.example:8080/upload.php".to_string(),
        }
    }

    #[test]
    fn test_measure_args_plain() {
        let options = ProbeOptions { threads: ThreadMode::Single, family: None };
        assert_eq!(
            measure_args(&locators(), options),
            vec![
                "http://dl.example:8080/file.jpg",
                "http://ul.example:8080/upload.php"
            ]
        );
    }

    #[test]
    fn test_ipv4_adds_no_flag() {
        let options = ProbeOptions {
            threads: ThreadMode::Single,
            family: Some(Family::Ipv4),
        };
        assert_eq!(measure_args(&locators(), options).len(), 2);
    }

    #[test]
    fn test_protocol_flag_follows_upload_then_thread_flag() {
        let options = ProbeOptions {
            threads: ThreadMode::Eight,
            family: Some(Family::Ipv6),
        };
        let args = measure_args(&locators(), options);
        assert_eq!(args[1], "http://ul.example:8080/upload.php");
        assert_eq!(&args[2..], ["-6", "-m"]);
    }

    #[test]
    fn test_thread_flag_without_family() {
        let options = ProbeOptions { threads: ThreadMode::Eight, family: None };
        assert_eq!(measure_args(&locators(), options).last().unwrap(), "-m");
    }

    #[test]
    fn test_name_args() {
        assert_eq!(name_args("上海"), vec!["-n", "上海"]);
    }

    #[tokio::test]
    async fn test_missing_binary_yields_empty_output() {
        let probe = BinaryProbe::new("/nonexistent/bimc");
        let options = ProbeOptions { threads: ThreadMode::Single, family: None };

        assert_eq!(probe.measure(&locators(), options).await, "");
        assert_eq!(probe.display_name("上海").await, "上海");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stdout_is_captured_even_on_failure() {
        let probe = BinaryProbe::new("sh");
        let output = probe
            .run(&[
                "-c".to_string(),
                "echo '0,失败,0,失败,-,-'; exit 3".to_string(),
            ])
            .await;
        assert_eq!(output.trim(), "0,失败,0,失败,-,-");
    }
}
