//! Session orchestration: probe every selected endpoint in order, stream
//! successes, and defer failures to the end of the run.

use colored::Colorize;
use log::{debug, info, warn};
use std::fmt;
use std::io::Write;
use tokio::time::Instant;

use crate::catalog::{self, Category, Endpoint};
use crate::errors::AppError;
use crate::probe::{Probe, ProbeOptions, ThreadMode};
use crate::results::{self, ParsedProbe, ProbeResult};

/// What the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestSelection {
    pub category: Category,
    pub threads: ThreadMode,
}

/// One formatted result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub isp: &'static str,
    pub location: &'static str,
    /// Padded name from the probe binary's lookup
    pub name: String,
    pub result: ProbeResult,
    pub success: bool,
}

impl ResultLine {
    fn new(endpoint: &Endpoint, name: String, parsed: ParsedProbe) -> Self {
        Self {
            isp: endpoint.isp,
            location: endpoint.location,
            name,
            result: parsed.result().clone(),
            success: parsed.is_success(),
        }
    }

    /// Terminal rendering with colors.
    pub fn colorize(&self) -> String {
        let r = &self.result;
        let node = format!("{}|{}", self.isp, self.name);

        if self.success {
            format!(
                "{}{}{}{}{}",
                node.red(),
                format!("↑ {:<10}", r.upload_mbps).green(),
                format!("↓ {:<10}", r.download_mbps).cyan(),
                format!("{:<8}", r.latency_ms).blue(),
                format!("{:<8}", r.jitter_ms).purple(),
            )
        } else {
            format!(
                "{}{}{}{}{}",
                node.red(),
                format!("↑ {:<10}", status_cell(&r.upload_mbps, &r.upload_status))
                    .yellow(),
                format!(
                    "↓ {:<10}",
                    status_cell(&r.download_mbps, &r.download_status)
                )
                .yellow(),
                format!("{:<8}", or_dash(&r.latency_ms)).blue(),
                format!("{:<8}", or_dash(&r.jitter_ms)).purple(),
            )
        }
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;
        write!(f, "{}|{}", self.isp, self.name)?;

        if self.success {
            write!(
                f,
                "↑ {:<10}↓ {:<10}{:<8}{:<8}",
                r.upload_mbps, r.download_mbps, r.latency_ms, r.jitter_ms
            )
        } else {
            write!(
                f,
                "↑ {:<10}↓ {:<10}{:<8}{:<8}",
                status_cell(&r.upload_mbps, &r.upload_status),
                status_cell(&r.download_mbps, &r.download_status),
                or_dash(&r.latency_ms),
                or_dash(&r.jitter_ms),
            )
        }
    }
}

fn status_cell(value: &str, status: &results::Status) -> String {
    if status.is_normal() {
        value.to_string()
    } else {
        status.to_string()
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub success_lines: Vec<ResultLine>,
    pub failure_lines: Vec<ResultLine>,
    pub elapsed_secs: u64,
    pub thread_mode_label: &'static str,
}

impl SessionSummary {
    /// `M 分 S 秒`
    pub fn elapsed_label(&self) -> String {
        format!("{} 分 {} 秒", self.elapsed_secs / 60, self.elapsed_secs % 60)
    }
}

/// Column header printed before the first probe.
pub fn header() -> String {
    format!(
        "{:<18}{:<12}{:<12}{:<8}{:<8}",
        "测速节点", "上传/Mbps", "下载/Mbps", "延迟/ms", "抖动/ms"
    )
}

/// Probe every endpoint of `selection.category` in catalog order.
///
/// Returns `Ok(None)` for [`Category::Cancel`] without probing anything.
/// Successful lines are written to `out` as each probe finishes; failures
/// are collected and written by [`print_summary`].
pub async fn run_session<P: Probe, W: Write>(
    probe: &P,
    selection: TestSelection,
    out: &mut W,
) -> Result<Option<SessionSummary>, AppError> {
    if selection.category == Category::Cancel {
        return Ok(None);
    }

    run_endpoints(probe, &catalog::select(selection.category), selection.threads, out)
        .await
        .map(Some)
}

pub(crate) async fn run_endpoints<P: Probe, W: Write>(
    probe: &P,
    endpoints: &[&Endpoint],
    threads: ThreadMode,
    out: &mut W,
) -> Result<SessionSummary, AppError> {
    info!(
        "Probing {} endpoints ({})",
        endpoints.len(),
        threads.label()
    );

    // A corrupt locator aborts before anything is printed or probed
    let decoded = endpoints
        .iter()
        .map(|endpoint| endpoint.locators().map(|locators| (*endpoint, locators)))
        .collect::<Result<Vec<_>, AppError>>()?;

    writeln!(out, "{}", header().bold())?;

    let mut success_lines = vec![];
    let mut failure_lines = vec![];
    let start = Instant::now();

    for (endpoint, locators) in decoded {
        let name = probe.display_name(endpoint.location).await;

        let options = ProbeOptions { threads, family: endpoint.family };
        let raw = probe.measure(&locators, options).await;

        let parsed = results::parse(&raw);
        if let ParsedProbe::Malformed { fields, .. } = &parsed {
            warn!(
                "{}{}: expected {} fields, got {}",
                endpoint.location,
                endpoint.isp,
                results::FIELD_COUNT,
                fields
            );
        }

        let line = ResultLine::new(endpoint, name, parsed);
        debug!(
            "{}{} finished, success: {}",
            line.location, line.isp, line.success
        );
        if line.success {
            writeln!(out, "{}", line.colorize())?;
            out.flush()?;
            success_lines.push(line);
        } else {
            failure_lines.push(line);
        }
    }

    let elapsed_secs = start.elapsed().as_secs();
    info!(
        "Finished: {} ok, {} failed in {}s",
        success_lines.len(),
        failure_lines.len(),
        elapsed_secs
    );

    Ok(SessionSummary {
        success_lines,
        failure_lines,
        elapsed_secs,
        thread_mode_label: threads.label(),
    })
}

/// Write the deferred failure block and the closing summary.
pub fn print_summary<W: Write>(
    summary: &SessionSummary,
    finished_at: &str,
    out: &mut W,
) -> std::io::Result<()> {
    if !summary.failure_lines.is_empty() {
        writeln!(out, "{}", "-".repeat(56))?;
        for line in &summary.failure_lines {
            writeln!(out, "{}", line.colorize())?;
        }
    }

    writeln!(out, "{}", "-".repeat(56))?;
    writeln!(
        out,
        "{} {}",
        "测试线程:".bold().white(),
        summary.thread_mode_label.bright_cyan()
    )?;
    writeln!(
        out,
        "{} {}",
        "本次测速耗时:".bold().white(),
        summary.elapsed_label().bright_cyan()
    )?;
    writeln!(out, "{} {}", "当前时间:".bold().white(), finished_at)?;

    Ok(())
}
