//! Where per-file failures go.
//!
//! The extractor never writes to a process-wide stream. It hands each
//! [`Diagnostic`] to a [`DiagnosticSink`] supplied by the caller; the
//! library default discards them and the binary logs them through
//! `tracing` to stderr.
use std::fmt;
use std::path::PathBuf;

use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub message: String,
}

impl Diagnostic {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error processing file: {} - {}", self.path.display(), self.message)
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Drops every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl DiagnosticSink for DiscardSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Emits each diagnostic as a `warn` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!(
            path = %diagnostic.path.display(),
            error = %diagnostic.message,
            "skipping file"
        );
    }
}

impl<F> DiagnosticSink for F
where
    F: FnMut(Diagnostic),
{
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}
