//! Parsing of probe output into structured results.
//!
//! The probe binary prints one line of six comma-separated fields:
//! upload value, upload status, download value, download status, latency
//! and jitter. Values are kept as opaque display strings; only the status
//! tokens are interpreted, by exact comparison. Only whitespace around the
//! whole line is stripped; fields are taken verbatim.

use std::fmt;

/// Status token the probe binary prints for a healthy transfer.
pub const SUCCESS_TOKEN: &str = "正常";

/// Number of fields in a well-formed probe line.
pub const FIELD_COUNT: usize = 6;

/// Outcome of one transfer direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Normal,
    /// Anything other than the success token, kept verbatim for display
    Abnormal(String),
}

impl Status {
    /// Classify a raw status token by exact equality with [`SUCCESS_TOKEN`].
    pub fn from_token(token: &str) -> Self {
        if token == SUCCESS_TOKEN {
            Status::Normal
        } else {
            Status::Abnormal(token.to_string())
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Status::Normal)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Normal => f.write_str(SUCCESS_TOKEN),
            Status::Abnormal(token) if token.is_empty() => f.write_str("-"),
            Status::Abnormal(token) => f.write_str(token),
        }
    }
}

/// Fields of a single probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub upload_mbps: String,
    pub upload_status: Status,
    pub download_mbps: String,
    pub download_status: Status,
    pub latency_ms: String,
    pub jitter_ms: String,
}

impl ProbeResult {
    fn from_fields(fields: &[&str]) -> Self {
        let field = |i: usize| fields.get(i).copied().unwrap_or("").to_string();

        Self {
            upload_mbps: field(0),
            upload_status: Status::from_token(&field(1)),
            download_mbps: field(2),
            download_status: Status::from_token(&field(3)),
            latency_ms: field(4),
            jitter_ms: field(5),
        }
    }

    /// True when both directions report the success token.
    pub fn is_success(&self) -> bool {
        self.upload_status.is_normal() && self.download_status.is_normal()
    }
}

/// A parsed probe line, tagged by whether it had the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedProbe {
    /// Exactly six fields were present.
    Complete(ProbeResult),
    /// The line had the wrong arity; fields were filled positionally and
    /// missing ones left empty.
    Malformed { result: ProbeResult, fields: usize },
}

impl ParsedProbe {
    pub fn result(&self) -> &ProbeResult {
        match self {
            ParsedProbe::Complete(result) => result,
            ParsedProbe::Malformed { result, .. } => result,
        }
    }

    /// Malformed output always counts as a failure.
    pub fn is_success(&self) -> bool {
        match self {
            ParsedProbe::Complete(result) => result.is_success(),
            ParsedProbe::Malformed { .. } => false,
        }
    }
}

/// Parse raw probe output. Never fails; unusable output degrades to an
/// abnormal result.
pub fn parse(raw: &str) -> ParsedProbe {
    let line = raw.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");

    let fields: Vec<&str> = if line.is_empty() {
        Vec::new()
    } else {
        line.split(',').collect()
    };

    let result = ProbeResult::from_fields(&fields);

    if fields.len() == FIELD_COUNT {
        ParsedProbe::Complete(result)
    } else {
        ParsedProbe::Malformed { result, fields: fields.len() }
    }
}
