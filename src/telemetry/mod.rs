//! Logging and OpenTelemetry initialization.
//!
//! Always installs a tracing-subscriber fmt layer on stderr. If an OTLP
//! endpoint is configured, traces, metrics, and logs are exported there as
//! well.

pub mod bootstrap;
pub mod metrics;

use crate::config::{Config, DEFAULT_LOG_LEVEL, LOG_LEVEL, OTEL_ENDPOINT, non_blank};
use crate::error::{Error, Result};

use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;

/// Configuration for telemetry initialization.
pub struct TelemetryConfig {
    /// Optional OTLP endpoint (e.g. "http://localhost:4317").
    /// When `None`, only the fmt layer is installed.
    pub endpoint: Option<String>,
    /// The service name reported in telemetry signals.
    pub service_name: String,
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl TelemetryConfig {
    /// Read `OTEL_ENDPOINT` and `LOG_LEVEL` from the process environment.
    ///
    /// Independent of the required variables, so telemetry can be set up
    /// even when [`Config::load`] fails.
    pub fn from_env(service_name: &str) -> Self {
        Self::from_lookup(|name| std::env::var(name).ok(), service_name)
    }

    /// Same as [`from_env`](Self::from_env) against an arbitrary source.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F, service_name: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            endpoint: non_blank(lookup(OTEL_ENDPOINT)),
            service_name: service_name.to_string(),
            log_level: non_blank(lookup(LOG_LEVEL))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    pub fn from_config(config: &Config, service_name: &str) -> Self {
        Self {
            endpoint: config.otel_endpoint().map(str::to_string),
            service_name: service_name.to_string(),
            log_level: config.log_level().to_string(),
        }
    }
}

struct OtelProviders {
    tracer: SdkTracerProvider,
    meter: SdkMeterProvider,
    logger: SdkLoggerProvider,
}

/// Guard that shuts down OTel providers on drop.
///
/// Hold it for the lifetime of the application.
pub struct TelemetryGuard {
    providers: Option<OtelProviders>,
}

impl TelemetryGuard {
    /// Whether OTLP exporters are attached.
    pub fn is_exporting(&self) -> bool {
        self.providers.is_some()
    }

    /// Force-flush all telemetry pipelines.
    pub fn force_flush(&self) {
        if let Some(ref p) = self.providers {
            let _ = p.tracer.force_flush();
            let _ = p.meter.force_flush();
            let _ = p.logger.force_flush();
        }
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        // Logs first so events emitted during span shutdown still go out.
        if let Some(p) = self.providers.take() {
            let _ = p.logger.shutdown();
            let _ = p.meter.shutdown();
            let _ = p.tracer.shutdown();
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to
/// [`TelemetryConfig::log_level`].
///
/// # Errors
///
/// Returns an error if the fallback filter does not parse, an OTLP exporter
/// fails to build, or a global subscriber is already set.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard> {
    use opentelemetry::trace::TracerProvider as _;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            Error::Telemetry(format!("invalid log filter {:?}: {e}", config.log_level))
        })?,
    };

    let providers = config
        .endpoint
        .as_deref()
        .map(|endpoint| build_providers(endpoint, &config.service_name))
        .transpose()?;

    let otel_trace_layer = providers
        .as_ref()
        .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer.tracer("copilot-rs")));
    let otel_log_layer = providers.as_ref().map(|p| {
        opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge::new(&p.logger)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .with(otel_trace_layer)
        .with(otel_log_layer)
        .try_init()
        .map_err(|e| Error::Telemetry(format!("failed to init tracing subscriber: {e}")))?;

    if let Some(ref p) = providers {
        opentelemetry::global::set_meter_provider(p.meter.clone());
    }

    Ok(TelemetryGuard { providers })
}

fn build_providers(endpoint: &str, service_name: &str) -> Result<OtelProviders> {
    use opentelemetry_otlp::WithExportConfig as _;

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name.to_string())
        .build();

    let span_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .map_err(|e| Error::Telemetry(format!("failed to create OTLP span exporter: {e}")))?;
    let tracer = SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();

    let metric_exporter = opentelemetry_otlp::MetricExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .map_err(|e| Error::Telemetry(format!("failed to create OTLP metric exporter: {e}")))?;
    let meter = SdkMeterProvider::builder()
        .with_periodic_exporter(metric_exporter)
        .with_resource(resource.clone())
        .build();

    let log_exporter = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .map_err(|e| Error::Telemetry(format!("failed to create OTLP log exporter: {e}")))?;
    let logger = SdkLoggerProvider::builder()
        .with_batch_exporter(log_exporter)
        .with_resource(resource)
        .build();

    Ok(OtelProviders {
        tracer,
        meter,
        logger,
    })
}
