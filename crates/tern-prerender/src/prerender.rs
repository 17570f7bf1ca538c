//! Prerendering of single URLs.
//!
//! [`prerender_url`] drives one render pass: synchronous setup (timing span,
//! per-render config, hydrate options, registry snapshot), exactly one
//! awaited renderer call, synchronous teardown. Callers batching many URLs
//! can rely on one in-flight renderer invocation per task when budgeting
//! concurrency.

use tern_core::config::BuildConfig;
use tern_core::diagnostics::catch_error;
use tern_hydrate::{HydrateOptions, HydrateResults};
use tracing::debug;

use crate::context::BuildContext;
use crate::target::PrerenderTarget;

/// What the caller gets back for every target: the hydrated page record.
pub type PrerenderResults = HydrateResults;

/// Prerenders one URL into static HTML.
///
/// Always returns a result record. On success the record carries the
/// renderer's HTML and the diagnostics of that render; on any failure the
/// record stays in its default empty shape and the failure is appended to
/// the build-wide diagnostics sink instead. A failed URL is isolated: it
/// never aborts the caller's batch and never poisons sibling renders, which
/// each work on their own registry snapshot.
///
/// Exactly one timing span is opened and finished per call, on every path.
///
/// There is no internal timeout or cancellation: once invoked, the task
/// runs to completion, and a hanging renderer hangs the task. Batch drivers
/// that need an upper bound should wrap the call in their own timeout.
///
/// # Example
///
/// ```ignore
/// let results = prerender_url(&config, &ctx, &index_src_html, &target).await;
/// if let Some(html) = results.html {
///     fs.write(out_path_for(&target), html)?;
/// }
/// ```
pub async fn prerender_url(
	config: &BuildConfig,
	ctx: &BuildContext,
	index_src_html: &str,
	target: &PrerenderTarget,
) -> PrerenderResults {
	let time_span = config
		.logger
		.create_time_span(format!("prerender, started: {}", target.url));

	let mut results = PrerenderResults::default();

	// the renderer gets its own copy; the caller's config stays untouched
	let renderer_config = config.clone();

	// unset or unusable prerender fields fall back to renderer defaults
	let prerender_config = renderer_config.prerender.clone().normalized();
	let hydrate_opts = HydrateOptions::for_target(&prerender_config, &target.url, index_src_html);
	debug!(target: "tern::prerender", url = %target.url, "hydrate options built");

	match ctx.snapshot_registry() {
		Ok(registry) => {
			let renderer = ctx.renderer_factory().create_renderer(
				renderer_config,
				registry,
				ctx.diagnostics().clone(),
			);

			// parse the html to a document, hydrate the components, then
			// serialize the hydrated document back into html
			match renderer.hydrate_to_string(hydrate_opts).await {
				Ok(hydrated) => results.merge(hydrated),
				Err(err) => catch_error(ctx.diagnostics(), &err),
			}
		}
		Err(err) => catch_error(ctx.diagnostics(), &err),
	}

	time_span.finish(format!("prerender, finished: {}", target.url));

	results
}
