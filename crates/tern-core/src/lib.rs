//! Tern Core - Build Primitives
//!
//! Shared building blocks for the Tern build pipeline:
//!
//! - [`diagnostics`]: structured error/warning records and the build-wide
//!   append-only sink
//! - [`logging`]: the build logger and its named timing spans
//! - [`config`]: process-wide build configuration, including the prerender
//!   sub-configuration
//! - [`registry`]: the compiled component registry and per-render snapshots
//!
//! Everything here is owned data behind cheap cloneable handles, so a build
//! can hand the same configuration and sinks to many concurrent tasks.

pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod registry;

pub use config::{BuildConfig, PrerenderConfig};
pub use diagnostics::{Diagnostic, Diagnostics, Severity, SourceLocation, catch_error};
pub use logging::{BuildLogger, TimeSpan};
pub use registry::{
	ComponentMeta, ComponentRegistry, RegistryError, RegistrySnapshot, SharedRegistry, StyleMeta,
};
