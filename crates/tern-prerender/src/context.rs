//! The shared build context.

use std::fmt;
use std::sync::Arc;

use tern_core::diagnostics::Diagnostics;
use tern_core::registry::{ComponentRegistry, RegistryError, RegistrySnapshot, SharedRegistry};
use tern_hydrate::RendererFactory;

/// State shared by every task of one build.
///
/// Carries the live component registry, the build-wide diagnostics sink and
/// the renderer factory. Cloning the context clones handles, not state:
/// every clone observes the same registry and reports into the same sink.
#[derive(Clone)]
pub struct BuildContext {
	registry: SharedRegistry,
	diagnostics: Diagnostics,
	renderer_factory: Arc<dyn RendererFactory>,
}

impl BuildContext {
	pub fn new(registry: ComponentRegistry, renderer_factory: Arc<dyn RendererFactory>) -> Self {
		Self {
			registry: SharedRegistry::new(registry),
			diagnostics: Diagnostics::new(),
			renderer_factory,
		}
	}

	/// The live, shared registry.
	pub fn registry(&self) -> &SharedRegistry {
		&self.registry
	}

	/// The build-wide diagnostics sink.
	pub fn diagnostics(&self) -> &Diagnostics {
		&self.diagnostics
	}

	pub fn renderer_factory(&self) -> &Arc<dyn RendererFactory> {
		&self.renderer_factory
	}

	/// Deep copy of the registry for one render pass.
	pub fn snapshot_registry(&self) -> Result<RegistrySnapshot, RegistryError> {
		self.registry.snapshot()
	}
}

impl fmt::Debug for BuildContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BuildContext")
			.field("registry", &self.registry)
			.field("diagnostics", &self.diagnostics)
			.finish_non_exhaustive()
	}
}
