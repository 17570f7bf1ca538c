//! The compiled component registry.
//!
//! The compiler produces one [`ComponentRegistry`] per build: a mapping from
//! component tag name to its compiled metadata. The registry is shared and
//! mutable across the whole build, so a render pass must never work on the
//! live value. [`SharedRegistry::snapshot`] takes a deep, value-isolated
//! copy; whatever a renderer does to its snapshot stays invisible to every
//! other render and to the shared registry itself.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error type for registry access.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// A writer panicked while holding the registry lock.
	#[error("component registry lock poisoned; cannot take a render snapshot")]
	Poisoned,
}

/// Compiled style metadata for one mode (e.g. `ios`, `md`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleMeta {
	/// URL of the compiled stylesheet.
	pub url: Option<String>,
	/// Inlined style text, when the compiler chose to embed it.
	pub text: Option<String>,
}

impl StyleMeta {
	pub fn from_url(url: impl Into<String>) -> Self {
		Self {
			url: Some(url.into()),
			text: None,
		}
	}
}

/// Compiled metadata of one component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentMeta {
	/// Custom element tag name, e.g. `app-page`.
	pub tag: String,
	/// Styles keyed by mode.
	pub styles: IndexMap<String, StyleMeta>,
	/// Whether the component renders into shadow DOM.
	pub shadow: bool,
	/// Lifecycle bindings as emitted by the compiler, kept opaque here.
	pub lifecycle: Value,
}

impl ComponentMeta {
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			..Default::default()
		}
	}

	pub fn with_style(mut self, mode: impl Into<String>, style: StyleMeta) -> Self {
		self.styles.insert(mode.into(), style);
		self
	}

	pub fn with_shadow(mut self, shadow: bool) -> Self {
		self.shadow = shadow;
		self
	}
}

/// Mapping from component tag name to compiled metadata.
///
/// Iteration order is registration order, which keeps build output stable
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentRegistry {
	components: IndexMap<String, ComponentMeta>,
}

impl ComponentRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a component under its tag, replacing any previous entry.
	pub fn register(&mut self, meta: ComponentMeta) {
		self.components.insert(meta.tag.clone(), meta);
	}

	pub fn get(&self, tag: &str) -> Option<&ComponentMeta> {
		self.components.get(tag)
	}

	pub fn get_mut(&mut self, tag: &str) -> Option<&mut ComponentMeta> {
		self.components.get_mut(tag)
	}

	pub fn tags(&self) -> impl Iterator<Item = &str> {
		self.components.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.components.len()
	}

	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}
}

/// Shared handle to the registry of one whole build.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
	inner: Arc<RwLock<ComponentRegistry>>,
}

impl SharedRegistry {
	pub fn new(registry: ComponentRegistry) -> Self {
		Self {
			inner: Arc::new(RwLock::new(registry)),
		}
	}

	/// Read access to the live registry.
	pub fn read(&self) -> Result<RwLockReadGuard<'_, ComponentRegistry>, RegistryError> {
		self.inner.read().map_err(|_| RegistryError::Poisoned)
	}

	/// Write access to the live registry (compiler-side mutation).
	pub fn write(&self) -> Result<RwLockWriteGuard<'_, ComponentRegistry>, RegistryError> {
		self.inner.write().map_err(|_| RegistryError::Poisoned)
	}

	/// Takes a deep copy of the registry as it is right now.
	///
	/// All metadata is owned data, so the clone is total; the only failure
	/// mode is the registry lock itself being poisoned.
	pub fn snapshot(&self) -> Result<RegistrySnapshot, RegistryError> {
		let guard = self.read()?;
		Ok(RegistrySnapshot {
			registry: guard.clone(),
		})
	}
}

/// A deep, value-isolated copy of the shared registry.
///
/// This is what a server renderer receives. Mutating it does not touch the
/// live registry or any other snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrySnapshot {
	registry: ComponentRegistry,
}

impl RegistrySnapshot {
	pub fn registry(&self) -> &ComponentRegistry {
		&self.registry
	}

	pub fn registry_mut(&mut self) -> &mut ComponentRegistry {
		&mut self.registry
	}

	pub fn into_inner(self) -> ComponentRegistry {
		self.registry
	}
}
