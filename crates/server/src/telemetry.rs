use axum::Router;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::sync::OnceLock;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_SERVICE_NAME: &str = "edunexus";

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Tokio runtime for the OTLP gRPC exporters. Tonic's `connect_lazy()`
/// calls `tokio::spawn`, which needs a runtime context that `dioxus::serve`
/// may not have propagated to our init closure yet.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Exporter settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySettings {
    pub endpoint: String,
    pub service_name: String,
    pub environment: String,
}

impl TelemetrySettings {
    /// `None` when `OTEL_EXPORTER_OTLP_ENDPOINT` is unset or blank.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok(),
            std::env::var("OTEL_SERVICE_NAME").ok(),
            std::env::var("DEPLOY_ENV").ok(),
        )
    }

    fn from_vars(
        endpoint: Option<String>,
        service_name: Option<String>,
        environment: Option<String>,
    ) -> Option<Self> {
        let endpoint = endpoint.filter(|e| !e.trim().is_empty())?;
        Some(Self {
            endpoint,
            service_name: service_name
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            environment: environment
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "development".to_string()),
        })
    }

    fn uses_tls(&self) -> bool {
        self.endpoint.starts_with("https://")
    }
}

/// Set up OTLP trace and log export when the `telemetry` flag is on.
///
/// Dioxus owns the tracing subscriber; this registers the global tracer
/// provider and bridges the `log` crate to the OTLP log exporter.
/// Failures are logged and leave the app running without export.
pub fn init_telemetry(enabled: bool) {
    if !enabled {
        tracing::info!("Telemetry flag off, skipping OTLP export");
        return;
    }
    let _ = dotenvy::dotenv();

    let Some(settings) = TelemetrySettings::from_env() else {
        tracing::warn!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP export");
        return;
    };

    match install_exporters(&settings) {
        Ok(()) => tracing::info!(
            endpoint = %settings.endpoint,
            service = %settings.service_name,
            version = APP_VERSION,
            "Telemetry initialized, traces and logs exporting"
        ),
        Err(e) => tracing::error!(error = %e, "Telemetry setup failed, continuing without export"),
    }
}

/// Tag every request with an `x-request-id` (kept if the caller sent one)
/// and echo it on the response, so log lines can be matched to requests.
pub fn with_request_ids<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn install_exporters(settings: &TelemetrySettings) -> Result<(), String> {
    let rt = match OTEL_RUNTIME.get() {
        Some(rt) => rt,
        None => {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .worker_threads(1)
                .build()
                .map_err(|e| format!("Failed to create OTEL runtime: {e}"))?;
            OTEL_RUNTIME.get_or_init(|| rt)
        }
    };
    let _guard = rt.enter();

    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.endpoint);
    if settings.uses_tls() {
        span_builder = span_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let span_exporter = span_builder
        .build()
        .map_err(|e| format!("Failed to create OTLP span exporter: {e}"))?;

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(settings.service_name.clone())
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new(
            "deployment.environment",
            settings.environment.clone(),
        ))
        .build();

    let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(tracer_provider);

    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.endpoint);
    if settings.uses_tls() {
        log_builder = log_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let log_exporter = log_builder
        .build()
        .map_err(|e| format!("Failed to create OTLP log exporter: {e}"))?;

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    // The `log` bridge is separate from the Dioxus-owned `tracing` subscriber.
    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => tracing::warn!("Log bridge skipped, a `log` logger is already set"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_endpoint_means_no_export() {
        assert_eq!(TelemetrySettings::from_vars(None, None, None), None);
        assert_eq!(
            TelemetrySettings::from_vars(Some("  ".into()), None, None),
            None
        );
    }

    #[test]
    fn defaults_fill_missing_names() {
        let settings =
            TelemetrySettings::from_vars(Some("http://localhost:4317".into()), None, Some("".into()))
                .unwrap();
        assert_eq!(settings.service_name, "edunexus");
        assert_eq!(settings.environment, "development");
        assert!(!settings.uses_tls());
    }

    #[test]
    fn https_endpoint_enables_tls() {
        let settings = TelemetrySettings::from_vars(
            Some("https://collector.example.com:443".into()),
            Some("edunexus-staging".into()),
            Some("staging".into()),
        )
        .unwrap();
        assert!(settings.uses_tls());
        assert_eq!(settings.service_name, "edunexus-staging");
    }
}
