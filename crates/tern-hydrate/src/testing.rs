//! Scripted renderers for tests.
//!
//! These doubles stand in for a real server renderer when exercising the
//! prerender pipeline. They are deliberately small: fixed output, fixed
//! failure, or recording of whatever crosses the seam.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tern_core::config::BuildConfig;
use tern_core::diagnostics::{Diagnostic, Diagnostics};
use tern_core::registry::RegistrySnapshot;

use crate::options::HydrateOptions;
use crate::renderer::{HydrateError, HydrateResult, Renderer, RendererFactory};
use crate::results::HydrateResults;

/// Renderer that always succeeds with fixed output.
#[derive(Debug, Clone, Default)]
pub struct StaticRenderer {
	pub html: String,
	pub diagnostics: Vec<Diagnostic>,
}

impl StaticRenderer {
	pub fn with_html(html: impl Into<String>) -> Self {
		Self {
			html: html.into(),
			diagnostics: Vec::new(),
		}
	}
}

#[async_trait]
impl Renderer for StaticRenderer {
	async fn hydrate_to_string(&self, _options: HydrateOptions) -> HydrateResult<HydrateResults> {
		Ok(HydrateResults {
			html: Some(self.html.clone()),
			diagnostics: self.diagnostics.clone(),
		})
	}
}

/// Renderer that always fails with the given message.
#[derive(Debug, Clone)]
pub struct FailingRenderer {
	pub message: String,
}

impl FailingRenderer {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

#[async_trait]
impl Renderer for FailingRenderer {
	async fn hydrate_to_string(&self, _options: HydrateOptions) -> HydrateResult<HydrateResults> {
		Err(HydrateError::Internal(self.message.clone()))
	}
}

/// Renderer that records every options value it is invoked with.
///
/// Useful for asserting how the pipeline merges configuration into the
/// per-render options.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
	html: String,
	invocations: Arc<Mutex<Vec<HydrateOptions>>>,
}

impl RecordingRenderer {
	pub fn with_html(html: impl Into<String>) -> Self {
		Self {
			html: html.into(),
			invocations: Arc::default(),
		}
	}

	/// Every options value seen so far, in invocation order.
	pub fn invocations(&self) -> Vec<HydrateOptions> {
		self.invocations.lock().clone()
	}

	pub fn last_options(&self) -> Option<HydrateOptions> {
		self.invocations.lock().last().cloned()
	}
}

#[async_trait]
impl Renderer for RecordingRenderer {
	async fn hydrate_to_string(&self, options: HydrateOptions) -> HydrateResult<HydrateResults> {
		self.invocations.lock().push(options);
		Ok(HydrateResults {
			html: Some(self.html.clone()),
			diagnostics: Vec::new(),
		})
	}
}

/// Factory that hands out one shared renderer and records every snapshot
/// that crosses the seam.
#[derive(Clone)]
pub struct StubRendererFactory {
	renderer: Arc<dyn Renderer>,
	snapshots: Arc<Mutex<Vec<RegistrySnapshot>>>,
}

impl StubRendererFactory {
	pub fn new(renderer: Arc<dyn Renderer>) -> Self {
		Self {
			renderer,
			snapshots: Arc::default(),
		}
	}

	/// Registry snapshots handed to renderers, in creation order.
	pub fn snapshots(&self) -> Vec<RegistrySnapshot> {
		self.snapshots.lock().clone()
	}

	pub fn created_count(&self) -> usize {
		self.snapshots.lock().len()
	}
}

impl RendererFactory for StubRendererFactory {
	fn create_renderer(
		&self,
		_config: BuildConfig,
		registry: RegistrySnapshot,
		_diagnostics: Diagnostics,
	) -> Arc<dyn Renderer> {
		self.snapshots.lock().push(registry);
		Arc::clone(&self.renderer)
	}
}
