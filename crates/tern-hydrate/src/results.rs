//! Hydration results.

use serde::{Deserialize, Serialize};
use tern_core::diagnostics::Diagnostic;

/// Output of one server render.
///
/// Starts out empty (`Default`) and is filled in by [`merge`] when the
/// renderer succeeds. The `diagnostics` are only ever the ones this render
/// produced; pipeline-level failures go to the build-wide sink instead, so
/// a failed render leaves the record in its initial shape.
///
/// [`merge`]: HydrateResults::merge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrateResults {
	/// Hydrated document, absent until a render succeeded.
	pub html: Option<String>,
	/// Diagnostics the renderer reported for this render.
	pub diagnostics: Vec<Diagnostic>,
}

impl HydrateResults {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces this record's fields with the renderer's output.
	///
	/// The record starts empty, so the renderer diagnostics replace rather
	/// than accumulate.
	pub fn merge(&mut self, other: HydrateResults) {
		self.html = other.html;
		self.diagnostics = other.diagnostics;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_record_is_empty() {
		let results = HydrateResults::default();
		assert!(results.html.is_none());
		assert!(results.diagnostics.is_empty());
	}

	#[test]
	fn test_merge_replaces_fields() {
		let mut results = HydrateResults::default();
		results.diagnostics.push(Diagnostic::warn("stale"));

		results.merge(HydrateResults {
			html: Some("<html>OK</html>".to_string()),
			diagnostics: vec![Diagnostic::info("rendered")],
		});

		assert_eq!(results.html.as_deref(), Some("<html>OK</html>"));
		assert_eq!(results.diagnostics.len(), 1);
		assert_eq!(results.diagnostics[0].message, "rendered");
	}

	#[test]
	fn test_serde_skips_nothing() {
		let results = HydrateResults {
			html: Some("<html></html>".to_string()),
			diagnostics: Vec::new(),
		};

		let json = serde_json::to_string(&results).unwrap();
		let back: HydrateResults = serde_json::from_str(&json).unwrap();
		assert_eq!(back, results);
	}
}
