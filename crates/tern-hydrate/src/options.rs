//! Per-render hydrate options.

use tern_core::config::PrerenderConfig;

/// Fallback when neither the config nor the caller bounds hydration depth.
pub const DEFAULT_MAX_HYDRATE_DEPTH: u32 = 32;

/// Options for one server render, immutable once handed to the renderer.
///
/// Built fresh per render from three sources with fixed precedence:
/// renderer defaults, overridden by whatever the prerender configuration
/// sets, overridden by the per-call `url` and `html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydrateOptions {
	/// URL being rendered.
	pub url: String,
	/// Source document text, as read from the index HTML file.
	pub html: String,
	/// Collapse runs of whitespace in the serialized document.
	pub collapse_whitespace: bool,
	/// Strip styles no component in the document uses.
	pub remove_unused_styles: bool,
	/// Inject a canonical `<link>` for the rendered URL.
	pub canonical_link: bool,
	/// Inline small external assets into the document.
	pub inline_assets: bool,
	/// Upper bound on nested component hydration.
	pub max_hydrate_depth: u32,
}

impl Default for HydrateOptions {
	fn default() -> Self {
		Self {
			url: String::new(),
			html: String::new(),
			collapse_whitespace: true,
			remove_unused_styles: false,
			canonical_link: false,
			inline_assets: false,
			max_hydrate_depth: DEFAULT_MAX_HYDRATE_DEPTH,
		}
	}
}

impl HydrateOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds the options for one prerender target.
	///
	/// Fields the configuration leaves unset fall back to the renderer
	/// defaults above. There is no per-target override channel: `url` and
	/// `html` always come from the call, everything else from the config.
	///
	/// # Example
	///
	/// ```
	/// use tern_core::config::PrerenderConfig;
	/// use tern_hydrate::HydrateOptions;
	///
	/// let config = PrerenderConfig {
	///     collapse_whitespace: Some(false),
	///     ..Default::default()
	/// };
	/// let options = HydrateOptions::for_target(&config, "/home", "<html></html>");
	///
	/// assert_eq!(options.url, "/home");
	/// assert!(!options.collapse_whitespace);
	/// ```
	pub fn for_target(
		prerender: &PrerenderConfig,
		url: impl Into<String>,
		html: impl Into<String>,
	) -> Self {
		let defaults = Self::default();
		Self {
			url: url.into(),
			html: html.into(),
			collapse_whitespace: prerender
				.collapse_whitespace
				.unwrap_or(defaults.collapse_whitespace),
			remove_unused_styles: prerender
				.remove_unused_styles
				.unwrap_or(defaults.remove_unused_styles),
			canonical_link: prerender.canonical_link.unwrap_or(defaults.canonical_link),
			inline_assets: prerender.inline_assets.unwrap_or(defaults.inline_assets),
			max_hydrate_depth: prerender
				.max_hydrate_depth
				.unwrap_or(defaults.max_hydrate_depth),
		}
	}

	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.url = url.into();
		self
	}

	pub fn html(mut self, html: impl Into<String>) -> Self {
		self.html = html.into();
		self
	}

	pub fn collapse_whitespace(mut self, enabled: bool) -> Self {
		self.collapse_whitespace = enabled;
		self
	}

	pub fn remove_unused_styles(mut self, enabled: bool) -> Self {
		self.remove_unused_styles = enabled;
		self
	}

	pub fn canonical_link(mut self, enabled: bool) -> Self {
		self.canonical_link = enabled;
		self
	}

	pub fn inline_assets(mut self, enabled: bool) -> Self {
		self.inline_assets = enabled;
		self
	}

	pub fn max_hydrate_depth(mut self, depth: u32) -> Self {
		self.max_hydrate_depth = depth;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unset_config_fields_fall_back_to_renderer_defaults() {
		let options = HydrateOptions::for_target(&PrerenderConfig::default(), "/a", "<html></html>");

		assert!(options.collapse_whitespace);
		assert!(!options.remove_unused_styles);
		assert!(!options.canonical_link);
		assert!(!options.inline_assets);
		assert_eq!(options.max_hydrate_depth, DEFAULT_MAX_HYDRATE_DEPTH);
	}

	#[test]
	fn test_config_fields_win_over_defaults() {
		let config = PrerenderConfig {
			collapse_whitespace: Some(false),
			remove_unused_styles: Some(true),
			max_hydrate_depth: Some(4),
			..Default::default()
		};

		let options = HydrateOptions::for_target(&config, "/a", "");

		assert!(!options.collapse_whitespace);
		assert!(options.remove_unused_styles);
		assert_eq!(options.max_hydrate_depth, 4);
	}

	#[test]
	fn test_url_and_html_come_from_the_call() {
		let options =
			HydrateOptions::for_target(&PrerenderConfig::default(), "/docs", "<html>src</html>");

		assert_eq!(options.url, "/docs");
		assert_eq!(options.html, "<html>src</html>");
	}

	#[test]
	fn test_builder_methods() {
		let options = HydrateOptions::new()
			.url("/about")
			.html("<html></html>")
			.canonical_link(true)
			.max_hydrate_depth(2);

		assert_eq!(options.url, "/about");
		assert!(options.canonical_link);
		assert_eq!(options.max_hydrate_depth, 2);
	}
}
