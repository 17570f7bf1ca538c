//! Build diagnostics.
//!
//! Diagnostics are structured warning/error records, independent of Rust's
//! error types. A build accumulates them in a [`Diagnostics`] sink instead of
//! aborting: one page failing to prerender must not take the batch down with
//! it. The sink is append-only and order-preserving.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	Error,
	Warn,
	Info,
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Error => write!(f, "error"),
			Self::Warn => write!(f, "warn"),
			Self::Info => write!(f, "info"),
		}
	}
}

/// Where in a source document a diagnostic points, when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
	/// File or URL the diagnostic refers to.
	pub file: String,
	pub line: Option<u32>,
	pub column: Option<u32>,
}

impl SourceLocation {
	pub fn new(file: impl Into<String>) -> Self {
		Self {
			file: file.into(),
			line: None,
			column: None,
		}
	}

	pub fn at(mut self, line: u32, column: u32) -> Self {
		self.line = Some(line);
		self.column = Some(column);
		self
	}
}

/// One structured diagnostic record.
///
/// # Example
///
/// ```
/// use tern_core::diagnostics::{Diagnostic, Severity};
///
/// let diagnostic = Diagnostic::error("component <my-tag> threw during render");
/// assert_eq!(diagnostic.severity, Severity::Error);
/// assert_eq!(diagnostic.header, "build error");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub severity: Severity,
	/// Short headline shown in build reports.
	pub header: String,
	pub message: String,
	pub location: Option<SourceLocation>,
}

impl Diagnostic {
	pub fn error(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			header: "build error".to_string(),
			message: message.into(),
			location: None,
		}
	}

	pub fn warn(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Warn,
			header: "build warn".to_string(),
			message: message.into(),
			location: None,
		}
	}

	pub fn info(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Info,
			header: "build info".to_string(),
			message: message.into(),
			location: None,
		}
	}

	pub fn with_header(mut self, header: impl Into<String>) -> Self {
		self.header = header.into();
		self
	}

	pub fn with_location(mut self, location: SourceLocation) -> Self {
		self.location = Some(location);
		self
	}
}

/// The build-wide diagnostics sink.
///
/// A cheap cloneable handle over one shared, append-only collection. Appends
/// are atomic with respect to interleaved tasks, so concurrent prerender
/// tasks can report into the same sink without coordination. Appending never
/// fails and never panics.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
	inner: Arc<Mutex<Vec<Diagnostic>>>,
}

impl Diagnostics {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends one diagnostic at the end of the collection.
	pub fn append(&self, diagnostic: Diagnostic) {
		self.inner.lock().push(diagnostic);
	}

	/// Appends several diagnostics, preserving their order.
	pub fn extend(&self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
		self.inner.lock().extend(diagnostics);
	}

	pub fn len(&self) -> usize {
		self.inner.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.lock().is_empty()
	}

	pub fn has_errors(&self) -> bool {
		self.inner
			.lock()
			.iter()
			.any(|d| d.severity == Severity::Error)
	}

	/// Returns an ordered copy of everything collected so far.
	pub fn snapshot(&self) -> Vec<Diagnostic> {
		self.inner.lock().clone()
	}
}

/// Captures a failed operation into the sink as a single error diagnostic.
///
/// This is the standard failure boundary of the build pipeline: the error is
/// recorded, the pipeline keeps going.
pub fn catch_error(diagnostics: &Diagnostics, err: &dyn std::error::Error) {
	diagnostics.append(Diagnostic::error(err.to_string()));
}
