//!
//! litesql-gen - Generator Support Utilities
//!
//! Provides the helpers the litesql code generator layers on top of the
//! string runtime:
//!
//! ## Wrapping
//! - `quote(s: &str) -> String` - Wrap in double quotes
//! - `brackets(s: &str) -> String` - Wrap in parentheses
//! - `sqbrackets(s: &str) -> String` - Wrap in square brackets
//! - `braces(s: &str) -> String` - Wrap in curly braces
//!
//! ## Input
//! - `read_file(path) -> Result<ByteString, GenError>` - Slurp a whole file
//!
//! ## Diagnostics
//! - `Report` - Injected sink for operator-visible messages
//! - `StderrReporter` - Default sink writing to standard error
//!
//! Wrapping functions treat their input as read-only and return freshly
//! owned output. Diagnostic emission is best-effort and never fails on
//! arbitrary byte content.
//!

use std::io::Write;
use std::path::{Path, PathBuf};

use litesql_string::{AllocError, ByteString};
use thiserror::Error;

/// Failures surfaced by generator support helpers.
#[derive(Debug, Error)]
pub enum GenError {
    /// The file could not be opened or read. No retry is performed.
    #[error("cannot read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The string runtime could not allocate storage for the content.
    #[error(transparent)]
    Alloc(#[from] AllocError),
}

/// Wrap text in double quotes.
pub fn quote(s: &str) -> String {
    format!("\"{s}\"")
}

/// Wrap text in parentheses.
pub fn brackets(s: &str) -> String {
    format!("({s})")
}

/// Wrap text in square brackets.
pub fn sqbrackets(s: &str) -> String {
    format!("[{s}]")
}

/// Wrap text in curly braces.
pub fn braces(s: &str) -> String {
    format!("{{{s}}}")
}

/// Read an entire file into a freshly created buffer.
pub fn read_file(path: &Path) -> Result<ByteString, GenError> {
    let bytes = std::fs::read(path).map_err(|source| GenError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ByteString::from_bytes(&bytes)?)
}

/// Sink for diagnostic messages.
///
/// Passed to generator code instead of having it write to a global channel,
/// so tests can capture emission deterministically.
pub trait Report {
    /// Emit one message. Best-effort; implementations must not panic on
    /// arbitrary byte content.
    fn report(&mut self, message: &ByteString);
}

/// Default sink: one line per message on standard error, rendered lossily.
pub struct StderrReporter;

impl Report for StderrReporter {
    fn report(&mut self, message: &ByteString) {
        let _ = writeln!(std::io::stderr(), "{message}");
    }
}
