//! # Tern
//!
//! Build-time prerendering for Tern web components.
//!
//! Given a compiled component registry and a set of target URLs, the
//! pipeline renders each page's component tree into static HTML ahead of
//! time, so a browser receives fully-formed markup before any client-side
//! script executes.
//!
//! ## Crates
//!
//! - [`core`](tern_core): diagnostics, build logging, configuration and the
//!   component registry
//! - [`hydrate`](tern_hydrate): the hydration contract between the pipeline
//!   and a server renderer
//! - [`prerender`](tern_prerender): the per-URL prerender orchestrator
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tern::{BuildConfig, BuildContext, PrerenderTarget, prerender_url};
//!
//! let config = BuildConfig::new();
//! let ctx = BuildContext::new(registry, Arc::new(renderer_factory));
//!
//! for target in targets {
//!     let results = prerender_url(&config, &ctx, &index_src_html, &target).await;
//!     if let Some(html) = results.html {
//!         write_page(&target, html)?;
//!     }
//! }
//! ```
//!
//! A failed URL never aborts the loop above: its failure lands in
//! `ctx.diagnostics()` and its result record comes back empty.

pub use tern_core as core;
pub use tern_hydrate as hydrate;
pub use tern_prerender as prerender;

pub use tern_core::config::{BuildConfig, PrerenderConfig};
pub use tern_core::diagnostics::{Diagnostic, Diagnostics, Severity, SourceLocation};
pub use tern_core::logging::{BuildLogger, TimeSpan};
pub use tern_core::registry::{
	ComponentMeta, ComponentRegistry, RegistrySnapshot, SharedRegistry, StyleMeta,
};
pub use tern_hydrate::{HydrateError, HydrateOptions, HydrateResults, Renderer, RendererFactory};
pub use tern_prerender::{BuildContext, PrerenderResults, PrerenderTarget, prerender_url};
