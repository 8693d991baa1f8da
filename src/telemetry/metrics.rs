//! Metric instrument factories for copilot-rs.
//!
//! Uses the OTel Meter API with the globally-registered `MeterProvider`.
//! Without an OTLP endpoint the global provider is a no-op.

use opentelemetry::KeyValue;
use opentelemetry::metrics::{Counter, Meter};

fn meter() -> Meter {
    opentelemetry::global::meter("copilot-rs")
}

/// Counter: configuration load attempts.
/// Labels: `result` ("ok" | "missing").
pub fn config_loads() -> Counter<u64> {
    meter()
        .u64_counter("copilot.config.loads")
        .with_description("Number of configuration load attempts")
        .build()
}

/// Count one load attempt with the given outcome.
pub fn record_config_load(ok: bool) {
    let result = if ok { "ok" } else { "missing" };
    config_loads().add(1, &[KeyValue::new("result", result)]);
}
