//! Build configuration.
//!
//! [`BuildConfig`] is assembled once per build by the CLI layer and is
//! read-only for the rest of the pipeline. Tasks that need a private copy
//! (the prerenderer hands one to every renderer it creates) take a shallow
//! clone; handles inside the config keep pointing at the build-wide state.

use serde::{Deserialize, Serialize};

use crate::logging::BuildLogger;

/// Process-wide configuration, immutable for the duration of a build.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
	/// Prerender sub-configuration, possibly partial.
	pub prerender: PrerenderConfig,
	/// Logger used for timing spans and build output.
	pub logger: BuildLogger,
}

impl BuildConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_prerender(mut self, prerender: PrerenderConfig) -> Self {
		self.prerender = prerender;
		self
	}

	pub fn with_logger(mut self, logger: BuildLogger) -> Self {
		self.logger = logger;
		self
	}
}

/// Prerender settings, as written by the user in the project config file.
///
/// Every field is optional: anything left unset falls back to the renderer's
/// own default when the per-render hydrate options are built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrerenderConfig {
	/// Collapse runs of whitespace in the serialized document.
	pub collapse_whitespace: Option<bool>,
	/// Strip styles no component in the document uses.
	pub remove_unused_styles: Option<bool>,
	/// Inject a canonical `<link>` for the prerendered URL.
	pub canonical_link: Option<bool>,
	/// Inline small external assets into the document.
	pub inline_assets: Option<bool>,
	/// Upper bound on nested component hydration.
	pub max_hydrate_depth: Option<u32>,
}

impl PrerenderConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Clamps values that cannot be honored.
	///
	/// A depth of zero would prerender nothing at all; it is treated as
	/// unset so the renderer default applies.
	pub fn normalized(mut self) -> Self {
		if self.max_hydrate_depth == Some(0) {
			self.max_hydrate_depth = None;
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn test_prerender_config_defaults_from_empty_json() {
		let config: PrerenderConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, PrerenderConfig::default());
		assert!(config.collapse_whitespace.is_none());
		assert!(config.max_hydrate_depth.is_none());
	}

	#[test]
	fn test_prerender_config_camel_case_fields() {
		let json = r#"{"collapseWhitespace": true, "maxHydrateDepth": 8}"#;
		let config: PrerenderConfig = serde_json::from_str(json).unwrap();

		assert_eq!(config.collapse_whitespace, Some(true));
		assert_eq!(config.max_hydrate_depth, Some(8));
		assert!(config.canonical_link.is_none());
	}

	#[rstest]
	#[case(Some(0), None)]
	#[case(Some(4), Some(4))]
	#[case(None, None)]
	fn test_normalized_depth(#[case] depth: Option<u32>, #[case] expected: Option<u32>) {
		let config = PrerenderConfig {
			max_hydrate_depth: depth,
			..Default::default()
		};

		assert_eq!(config.normalized().max_hydrate_depth, expected);
	}

	#[test]
	fn test_shallow_copy_shares_logger_state() {
		let config = BuildConfig::new();
		let copy = config.clone();

		copy.logger.create_time_span("copied").finish("copied done");

		// The per-render copy still reports into the build's logger.
		assert_eq!(config.logger.finished_span_count(), 1);
	}
}
