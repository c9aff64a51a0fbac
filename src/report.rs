//! Findings and verdicts — the output side of every decode pass.
//!
//! A decoder never prints.  It pushes severity-tagged [`Finding`]s into a
//! [`Report`] in the order it discovers them in the buffer, then seals the
//! report with a terminal [`Verdict`].  Rendering (text or JSON) is the
//! caller's business; see `render.rs` and the driver.
//!
//! One report per decode call.  Nothing here is shared between calls, so
//! any number of decodes may run concurrently and identical input always
//! produces an identical report.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Terminal classification of a decode pass.
///
/// `EndedOnZeroBlock` is TAP-specific: real-world tapes carry runs of zero
/// bytes after the last block, and a zero block length cannot be told apart
/// from truncation-to-padding.  The ambiguity is preserved as its own
/// verdict rather than guessed away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    Invalid,
    Unsupported,
    Truncated,
    EndedOnZeroBlock,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Valid            => "valid",
            Verdict::Invalid          => "invalid",
            Verdict::Unsupported      => "unsupported",
            Verdict::Truncated        => "truncated",
            Verdict::EndedOnZeroBlock => "ended on zero-length block",
        }
    }
}

/// Structured payload attached to a finding, for machine consumers.
/// The human-readable message always carries the same information.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Field {
    Version { major: u8, minor: u8 },
    BlockId { id: u8 },
    Size { bytes: u64 },
    Text { value: String },
    /// `value: None` is the POPUP sentinel (stored value 256): the loader
    /// asks the user instead of writing a literal byte.
    Poke { bank: u32, address: u32, value: Option<u32>, original: u32 },
    ZipEntry { name: String, method: u16 },
    ZipTotals { matched: usize, total: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Render indentation level; mirrors the nesting of the structure the
    /// finding describes (file → block → sub-field).
    pub depth:    u8,
    pub message:  String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field:    Option<Field>,
}

/// Ordered findings plus the terminal verdict for one decode call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub verdict:  Verdict,
    pub findings: Vec<Finding>,
}

impl Report {
    /// Start an empty report.  The verdict set here is a placeholder; every
    /// decoder ends by calling [`Report::finish`].
    pub fn new() -> Self {
        Self { verdict: Verdict::Valid, findings: Vec::new() }
    }

    pub fn push(&mut self, severity: Severity, depth: u8, message: impl Into<String>, field: Option<Field>) {
        self.findings.push(Finding { severity, depth, message: message.into(), field });
    }

    pub fn info(&mut self, depth: u8, message: impl Into<String>) {
        self.push(Severity::Info, depth, message, None);
    }

    pub fn info_field(&mut self, depth: u8, message: impl Into<String>, field: Field) {
        self.push(Severity::Info, depth, message, Some(field));
    }

    pub fn warning(&mut self, depth: u8, message: impl Into<String>) {
        self.push(Severity::Warning, depth, message, None);
    }

    pub fn error(&mut self, depth: u8, message: impl Into<String>) {
        self.push(Severity::Error, depth, message, None);
    }

    /// Seal the report with its terminal verdict.
    pub fn finish(mut self, verdict: Verdict) -> Report {
        self.verdict = verdict;
        self
    }

    /// True when no finding is a warning or an error.
    pub fn is_clean(&self) -> bool {
        self.findings.iter().all(|f| f.severity == Severity::Info)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
