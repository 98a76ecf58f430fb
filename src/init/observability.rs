use std::time::Duration;

use opentelemetry::global::{self};
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{MetricExporter, WithExportConfig};
use opentelemetry_sdk::{
    metrics::{PeriodicReader, SdkMeterProvider},
    trace::{Sampler, SdkTracerProvider},
    Resource,
};
use tracing_log::LogTracer;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::config::Settings;
use crate::utils::APP_NAME;

use super::StartupError;

fn init_tracer_provider(settings: &Settings) -> Result<SdkTracerProvider, StartupError> {
    let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.telemetry.tracing_endpoint)
        .build()?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(otlp_exporter)
        .with_resource(Resource::builder().with_service_name(APP_NAME).build())
        .with_sampler(Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(
            settings.telemetry.tracing_sampling_rate,
        ))))
        .build();

    global::set_tracer_provider(provider.clone());

    Ok(provider)
}

/// Installs the global subscriber. The OTLP span exporter is only built when
/// `telemetry.tracing` is on; the returned provider must outlive the server.
pub fn init_tracing(settings: &Settings) -> Result<Option<SdkTracerProvider>, StartupError> {
    LogTracer::init()?;

    let provider = settings
        .tracing_enabled()
        .then(|| init_tracer_provider(settings))
        .transpose()?;

    let telemetry_layer = provider
        .as_ref()
        .map(|provider| OpenTelemetryLayer::new(provider.tracer(APP_NAME)));

    let fmt_layer = settings.telemetry.stdout_tracing.then(|| {
        fmt::layer()
            .with_level(true)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .compact()
    });

    let subscriber = Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(telemetry_layer)
        .with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(provider)
}

pub fn init_metrics_provider(settings: &Settings) -> Result<SdkMeterProvider, StartupError> {
    let exporter = MetricExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.telemetry.metrics_endpoint)
        .build()?;

    let provider = SdkMeterProvider::builder()
        .with_resource(Resource::builder().with_service_name(APP_NAME).build())
        .with_reader(
            PeriodicReader::builder(exporter)
                .with_interval(Duration::from_secs(10))
                .build(),
        )
        .build();

    global::set_meter_provider(provider.clone());

    Ok(provider)
}
