//! Tern Hydrate - Server Rendering Contract
//!
//! The in-process contract between the build pipeline and a server renderer:
//!
//! - [`options`]: per-render [`HydrateOptions`], built by merging the global
//!   prerender configuration with the target URL and source HTML
//! - [`results`]: [`HydrateResults`], the hydrated HTML plus the diagnostics
//!   one render produced
//! - [`renderer`]: the [`Renderer`] and [`RendererFactory`] capability
//!   traits the pipeline consumes
//!
//! The renderer itself (DOM parsing, component lifecycles, serialization)
//! lives behind the trait seam; this crate defines only the values that
//! cross it. The `testing` feature adds scripted renderers for tests.

pub mod options;
pub mod renderer;
pub mod results;

#[cfg(feature = "testing")]
pub mod testing;

pub use options::HydrateOptions;
pub use renderer::{HydrateError, HydrateResult, Renderer, RendererFactory};
pub use results::HydrateResults;
