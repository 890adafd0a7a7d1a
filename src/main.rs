extern crate clap;

mod bootstrap;
mod catalog;
mod errors;
mod menu;
mod probe;
mod results;
mod session;

use crate::bootstrap::InstalledBinary;
use crate::errors::{exit_codes, format_error_for_display, AppError, ErrorKind};
use crate::probe::BinaryProbe;
use crate::session::{SessionSummary, TestSelection};
use chrono::Local;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colored::Colorize;
use log::{debug, info};
use std::future::Future;
use std::io::{self, Write};
use std::path::PathBuf;

/// Interactive multi-endpoint network speed test launcher.
#[derive(Parser)]
#[command(author, version = env!("BIMSPEED_VERSION"), about, long_about = None)]
struct Cli {
    /// Use an existing probe binary instead of downloading one
    #[arg(long, value_name = "PATH")]
    binary: Option<PathBuf>,

    /// Release directory to download the probe binary from
    #[arg(long, value_name = "URL", default_value = bootstrap::DEFAULT_DOWNLOAD_URL)]
    download_url: String,

    /// Leave the downloaded probe binary in place after the run
    #[arg(long)]
    keep_binary: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Completed,
    Cancelled,
    Interrupted,
}

impl Outcome {
    fn exit_code(self) -> i32 {
        match self {
            Outcome::Completed => exit_codes::SUCCESS,
            Outcome::Cancelled => exit_codes::CANCELLED,
            Outcome::Interrupted => exit_codes::INTERRUPTED,
        }
    }
}

/// A session that produced no summary was cancelled from the menu.
fn session_outcome(summary: &Option<SessionSummary>) -> Outcome {
    match summary {
        Some(_) => Outcome::Completed,
        None => Outcome::Cancelled,
    }
}

/// Run `task` until it finishes or `interrupt` fires, whichever is first.
/// `Ok(None)` means the task was interrupted.
async fn interruptible<T>(
    task: impl Future<Output = Result<T, AppError>>,
    interrupt: impl Future,
) -> Result<Option<T>, AppError> {
    tokio::select! {
        result = task => result.map(Some),
        _ = interrupt => {
            info!("Interrupted");
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli: Cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let code = match run(cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            eprintln!("{}", format_error_for_display(&error).red());
            error.exit_code()
        }
    };

    std::process::exit(code);
}

async fn prompt_selection() -> Result<TestSelection, AppError> {
    tokio::task::spawn_blocking(|| {
        menu::prompt(&mut io::stdin().lock(), &mut io::stdout())
    })
    .await
    .map_err(|e| {
        AppError::new(ErrorKind::Unknown, "menu prompt did not finish")
            .with_source(e)
    })?
}

/// Returns once the downloaded binary, if any, has been dropped, so every
/// exit path including Ctrl-C removes it.
async fn run(cli: Cli) -> Result<Outcome, AppError> {
    let binary = match cli.binary {
        Some(path) if path.is_file() => InstalledBinary::existing(path),
        Some(path) => {
            return Err(AppError::bootstrap(format!(
                "probe binary {} does not exist",
                path.display()
            )))
        }
        None => {
            bootstrap::install(
                &cli.download_url,
                &std::env::current_dir()?,
                cli.keep_binary,
            )
            .await?
        }
    };

    let probe = BinaryProbe::new(binary.path());
    debug!("Using probe binary {}", probe.program().display());

    writeln!(
        io::stdout(),
        "{} {}",
        env!("CARGO_PKG_NAME").bold().white(),
        env!("BIMSPEED_VERSION").bright_blue()
    )?;

    let Some(selection) =
        interruptible(prompt_selection(), tokio::signal::ctrl_c()).await?
    else {
        return Ok(Outcome::Interrupted);
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(summary) = interruptible(
        session::run_session(&probe, selection, &mut out),
        tokio::signal::ctrl_c(),
    )
    .await?
    else {
        return Ok(Outcome::Interrupted);
    };

    let outcome = session_outcome(&summary);
    match summary {
        Some(summary) => {
            let finished_at =
                Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            session::print_summary(&summary, &finished_at, &mut out)?;
        }
        None => info!("Cancelled from the menu"),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Locators};
    use crate::probe::{Probe, ProbeOptions, ThreadMode};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts every call; cancelled runs must never reach it.
    #[derive(Default)]
    struct CountingProbe {
        calls: AtomicUsize,
    }

    impl Probe for CountingProbe {
        async fn display_name(&self, location: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            location.to_string()
        }

        async fn measure(&self, _: &Locators, _: ProbeOptions) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            String::new()
        }
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(Outcome::Completed.exit_code(), exit_codes::SUCCESS);
        assert_eq!(Outcome::Cancelled.exit_code(), exit_codes::CANCELLED);
        assert_eq!(Outcome::Interrupted.exit_code(), 130);
    }

    #[tokio::test]
    async fn test_cancel_selection_exits_with_cancelled() {
        let probe = CountingProbe::default();
        let selection = TestSelection {
            category: Category::Cancel,
            threads: ThreadMode::Single,
        };
        let mut out = Vec::new();

        let summary = session::run_session(&probe, selection, &mut out)
            .await
            .unwrap();

        assert_eq!(session_outcome(&summary), Outcome::Cancelled);
        assert_eq!(session_outcome(&summary).exit_code(), exit_codes::CANCELLED);
        assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_completed_session_exits_with_success() {
        let probe = CountingProbe::default();
        let selection = TestSelection {
            category: Category::EduIpv6,
            threads: ThreadMode::Single,
        };
        let mut out = Vec::new();

        let summary = session::run_session(&probe, selection, &mut out)
            .await
            .unwrap();

        assert_eq!(session_outcome(&summary).exit_code(), exit_codes::SUCCESS);
        assert!(probe.calls.load(Ordering::SeqCst) > 0);
    }

    #[test]
    fn test_version_string_starts_with_package_version() {
        assert!(env!("BIMSPEED_VERSION").starts_with(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_blocking_prompt_on_multi_thread_runtime() {
        let task = async {
            tokio::task::spawn_blocking(|| {
                let mut input = io::Cursor::new(b"3\ny\n".to_vec());
                menu::prompt(&mut input, &mut io::sink())
            })
            .await
            .unwrap()
        };

        let selection = interruptible(task, std::future::pending::<()>())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(selection.category, Category::Telecom);
        assert_eq!(selection.threads, ThreadMode::Eight);
    }

    #[tokio::test]
    async fn test_interrupt_wins_over_pending_task() {
        let result = interruptible(
            std::future::pending::<Result<(), AppError>>(),
            async {},
        )
        .await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_finished_task_is_returned() {
        let result =
            interruptible(async { Ok(7) }, std::future::pending::<()>()).await;
        assert!(matches!(result, Ok(Some(7))));
    }

    #[tokio::test]
    async fn test_task_error_is_propagated() {
        let result = interruptible(
            async { Err::<(), _>(AppError::input("input closed")) },
            std::future::pending::<()>(),
        )
        .await;
        assert_eq!(result.unwrap_err().kind, ErrorKind::Input);
    }
}
