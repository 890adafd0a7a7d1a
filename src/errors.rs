//! Error types for the speed test launcher.
//!
//! This module provides user-friendly error types that wrap underlying
//! errors with clear, actionable messages and map them to exit codes.

use std::error::Error;
use std::fmt;

/// Exit codes for the application.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// The user picked the cancel entry from the menu.
    pub const CANCELLED: i32 = 1;
    /// Network error while fetching the probe binary.
    pub const NETWORK_ERROR: i32 = 2;
    /// The probe binary could not be made available.
    pub const BOOTSTRAP_ERROR: i32 = 3;
    /// A catalog entry could not be decoded.
    pub const CATALOG_ERROR: i32 = 4;
    /// Interactive input ended or could not be read.
    pub const INPUT_ERROR: i32 = 5;
    /// Interrupted with Ctrl-C at the menu or during a session.
    pub const INTERRUPTED: i32 = 130;
    /// Unknown/unexpected error.
    pub const UNKNOWN_ERROR: i32 = 99;
}

/// Categories of errors that can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Probe binary missing and could not be installed.
    Bootstrap,
    /// Network connectivity issues during bootstrap.
    Network,
    /// Connection timeout during bootstrap.
    Timeout,
    /// A static catalog entry is corrupt.
    Catalog,
    /// Interactive input failed.
    Input,
    /// Local I/O failure.
    Io,
    /// Unknown or unexpected errors.
    Unknown,
}

impl ErrorKind {
    /// Get the exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::Bootstrap => exit_codes::BOOTSTRAP_ERROR,
            ErrorKind::Network => exit_codes::NETWORK_ERROR,
            ErrorKind::Timeout => exit_codes::NETWORK_ERROR,
            ErrorKind::Catalog => exit_codes::CATALOG_ERROR,
            ErrorKind::Input => exit_codes::INPUT_ERROR,
            ErrorKind::Io => exit_codes::BOOTSTRAP_ERROR,
            ErrorKind::Unknown => exit_codes::UNKNOWN_ERROR,
        }
    }

    /// Get a user-friendly description of this error kind.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::Bootstrap => "Bootstrap error",
            ErrorKind::Network => "Network error",
            ErrorKind::Timeout => "Connection timeout",
            ErrorKind::Catalog => "Catalog error",
            ErrorKind::Input => "Input error",
            ErrorKind::Io => "I/O error",
            ErrorKind::Unknown => "Unknown error",
        }
    }
}

/// A user-friendly error type for launcher operations.
#[derive(Debug)]
pub struct AppError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// User-friendly error message.
    pub message: String,
    /// Optional suggestion for how to resolve the error.
    pub suggestion: Option<String>,
    /// The underlying error, if any.
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), suggestion: None, source: None }
    }

    /// Add a suggestion for how to resolve the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add the underlying error source.
    pub fn with_source(
        mut self,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Prefix the message with the endpoint the error belongs to.
    pub fn with_endpoint(
        mut self,
        location: &str,
        isp: &str,
        which: &str,
    ) -> Self {
        self.message =
            format!("{}{} {} locator: {}", location, isp, which, self.message);
        self
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }

    /// Create a bootstrap error.
    pub fn bootstrap(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Bootstrap, message).with_suggestion(
            "Pass an existing probe binary with --binary <PATH>.",
        )
    }

    /// Create a catalog error.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Catalog, message)
    }

    /// Create an input error.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.description(), self.message)?;

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }

        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        let kind = match error.kind() {
            std::io::ErrorKind::UnexpectedEof => ErrorKind::Input,
            _ => ErrorKind::Io,
        };
        AppError::new(kind, error.to_string()).with_source(error)
    }
}

/// Classify an error into an ErrorKind based on its message.
pub fn classify_error(error: &dyn Error) -> ErrorKind {
    let error_str = error.to_string().to_lowercase();

    if error_str.contains("timeout")
        || error_str.contains("timed out")
        || error_str.contains("deadline")
    {
        return ErrorKind::Timeout;
    }

    if error_str.contains("dns")
        || error_str.contains("resolve")
        || error_str.contains("connection refused")
        || error_str.contains("connection reset")
        || error_str.contains("network unreachable")
        || error_str.contains("host unreachable")
        || error_str.contains("no route")
        || error_str.contains("error sending request")
    {
        return ErrorKind::Network;
    }

    if error_str.contains("permission denied")
        || error_str.contains("read-only file system")
        || error_str.contains("no space left")
    {
        return ErrorKind::Io;
    }

    if error_str.contains("status client error")
        || error_str.contains("status server error")
    {
        return ErrorKind::Bootstrap;
    }

    ErrorKind::Unknown
}

/// Convert a generic error into an AppError with appropriate classification.
pub fn to_app_error(
    error: Box<dyn Error + Send + Sync>,
    context: &str,
) -> AppError {
    let kind = classify_error(error.as_ref());
    let message = format!("{}: {}", context, error);

    let mut app_error = AppError::new(kind, message);
    app_error.source = Some(error);

    match kind {
        ErrorKind::Network => app_error
            .with_suggestion("Check your internet connection and try again."),
        ErrorKind::Timeout => app_error.with_suggestion(
            "The download server may be slow or unreachable. Try again later.",
        ),
        ErrorKind::Io => app_error.with_suggestion(
            "Run from a writable directory or pass --binary <PATH>.",
        ),
        ErrorKind::Bootstrap | ErrorKind::Unknown => app_error.with_suggestion(
            "Pass an existing probe binary with --binary <PATH>.",
        ),
        _ => app_error,
    }
}

/// Format an error for user display.
pub fn format_error_for_display(error: &AppError) -> String {
    let mut output = format!("Error: {}", error.message);

    if let Some(ref suggestion) = error.suggestion {
        output.push_str(&format!("\n\nSuggestion: {}", suggestion));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_exit_codes() {
        assert_eq!(ErrorKind::Bootstrap.exit_code(), exit_codes::BOOTSTRAP_ERROR);
        assert_eq!(ErrorKind::Network.exit_code(), exit_codes::NETWORK_ERROR);
        assert_eq!(ErrorKind::Timeout.exit_code(), exit_codes::NETWORK_ERROR);
        assert_eq!(ErrorKind::Catalog.exit_code(), exit_codes::CATALOG_ERROR);
        assert_eq!(ErrorKind::Input.exit_code(), exit_codes::INPUT_ERROR);
        assert_ne!(exit_codes::CANCELLED, exit_codes::SUCCESS);
    }

    #[test]
    fn test_app_error_display() {
        let error =
            AppError::new(ErrorKind::Network, "Failed to fetch probe binary")
                .with_suggestion("Check your internet connection.");

        let display = format!("{}", error);
        assert!(display.contains("Network error"));
        assert!(display.contains("Failed to fetch"));
        assert!(display.contains("Suggestion"));
    }

    #[test]
    fn test_with_endpoint_prefixes_message() {
        let error = AppError::catalog("locator is not valid base64")
            .with_endpoint("上海", "电信", "upload");
        assert_eq!(
            error.message,
            "上海电信 upload locator: locator is not valid base64"
        );
    }

    #[test]
    fn test_io_eof_maps_to_input() {
        let error: AppError = std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )
        .into();
        assert_eq!(error.kind, ErrorKind::Input);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_classify_error_timeout() {
        let error = std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "connection timed out",
        );
        assert_eq!(classify_error(&error), ErrorKind::Timeout);
    }

    #[test]
    fn test_classify_error_network() {
        let error = std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        );
        assert_eq!(classify_error(&error), ErrorKind::Network);
    }

    #[test]
    fn test_classify_error_unknown() {
        let error =
            std::io::Error::new(std::io::ErrorKind::Other, "some random error");
        assert_eq!(classify_error(&error), ErrorKind::Unknown);
    }

    #[test]
    fn test_to_app_error() {
        let error: Box<dyn Error + Send + Sync> = Box::new(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ));

        let app_error = to_app_error(error, "writing probe binary");

        assert_eq!(app_error.kind, ErrorKind::Io);
        assert!(app_error.message.contains("writing probe binary"));
        assert!(app_error.suggestion.is_some());
    }

    #[test]
    fn test_format_error_for_display() {
        let error = AppError::bootstrap("unsupported architecture `sparc`");
        let output = format_error_for_display(&error);
        assert!(output.starts_with("Error: unsupported architecture"));
        assert!(output.contains("--binary"));
    }
}
