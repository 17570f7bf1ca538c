//! Tern Prerender - Ahead-of-Time Page Rendering
//!
//! Renders each target URL's component tree into static HTML before any
//! client-side script runs, so a browser receives fully-formed markup.
//!
//! - [`target`]: the [`PrerenderTarget`] a URL-discovery step hands in
//! - [`context`]: the [`BuildContext`] shared across one whole build
//! - [`prerender`]: [`prerender_url`], the per-URL orchestrator
//!
//! The orchestrator is fault-isolating by construction: a single URL's
//! failure becomes a diagnostic in the build-wide sink, never an error the
//! batch driver has to handle.

pub mod context;
pub mod prerender;
pub mod target;

pub use context::BuildContext;
pub use prerender::{PrerenderResults, prerender_url};
pub use target::PrerenderTarget;
