//! The server renderer capability seam.
//!
//! The build pipeline never renders anything itself; it consumes a renderer
//! through these traits. A renderer is created per render pass, bound to a
//! private copy of the build configuration and a registry snapshot it may
//! mutate freely.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tern_core::config::BuildConfig;
use tern_core::diagnostics::Diagnostics;
use tern_core::registry::RegistrySnapshot;

use crate::options::HydrateOptions;
use crate::results::HydrateResults;

/// Error type for unrecoverable renderer failures.
///
/// Renderable problems (a component warning, a missing style) belong in
/// [`HydrateResults::diagnostics`], not here.
#[derive(Debug, Error)]
pub enum HydrateError {
	/// The source document could not be parsed at all.
	#[error("failed to parse source document: {0}")]
	Parse(String),

	/// A component lifecycle failed while hydrating.
	#[error("component <{tag}> failed to hydrate: {message}")]
	Component {
		/// Tag of the failing component.
		tag: String,
		message: String,
	},

	/// Renderer-internal failure.
	#[error("renderer failure: {0}")]
	Internal(String),
}

/// Result type for renderer operations.
pub type HydrateResult<T> = std::result::Result<T, HydrateError>;

/// A server renderer bound to one render pass.
#[async_trait]
pub trait Renderer: Send + Sync {
	/// Parses the source document, hydrates the component tree against the
	/// registry snapshot and serializes the result back to HTML.
	///
	/// Resolves with a result record for any renderable outcome, including
	/// renders that only produced diagnostics; errs only on unrecoverable
	/// internal failure.
	async fn hydrate_to_string(&self, options: HydrateOptions) -> HydrateResult<HydrateResults>;
}

/// Creates renderers for the build pipeline.
pub trait RendererFactory: Send + Sync {
	/// Creates a renderer bound to a per-render configuration, a registry
	/// snapshot it owns outright, and the build-wide diagnostics sink.
	fn create_renderer(
		&self,
		config: BuildConfig,
		registry: RegistrySnapshot,
		diagnostics: Diagnostics,
	) -> Arc<dyn Renderer>;
}
