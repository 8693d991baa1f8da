//! Startup span helpers.
//!
//! Wraps configuration loading in a span so a failed start is visible in
//! traces with the names of the variables that were missing.

use tracing::Span;

/// Start the span covering env file loading and config validation.
///
/// `config.missing` is declared empty and filled by [`record_missing`].
pub fn start_bootstrap_span(service: &str) -> Span {
    tracing::info_span!(
        "config.bootstrap",
        "service.name" = service,
        "config.missing" = tracing::field::Empty,
    )
}

/// Record the missing variable names on the span and emit an error event.
pub fn record_missing(span: &Span, missing: &[&str]) {
    let names = missing.join(",");
    span.record("config.missing", names.as_str());
    span.in_scope(|| {
        tracing::error!(missing = %names, "required configuration missing");
    });
}
