//! Prerender targets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One URL requested for prerendering.
///
/// Targets come from an upstream URL-discovery step and are never mutated
/// by the pipeline. Identity is the URL string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrerenderTarget {
	pub url: String,
}

impl PrerenderTarget {
	pub fn new(url: impl Into<String>) -> Self {
		Self { url: url.into() }
	}
}

impl fmt::Display for PrerenderTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.url)
	}
}

impl From<&str> for PrerenderTarget {
	fn from(url: &str) -> Self {
		Self::new(url)
	}
}

impl From<String> for PrerenderTarget {
	fn from(url: String) -> Self {
		Self { url }
	}
}
