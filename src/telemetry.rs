//! Process-wide metrics.
//!
//! A single Prometheus recorder is built at startup and installed as the global
//! [`metrics`] recorder. [`Telemetry`] keeps the handle used to render it.

use std::time::{Duration, Instant};

use anyhow::Context;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};
use reqwest::StatusCode;
use tokio::task::JoinHandle;

pub const SERVICE_NAME: &str = "books-demo";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_DESCRIPTION: &str = "Rust Axum Application";

/// How often histogram samples are drained into their summaries.
pub const UPKEEP_PERIOD: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct Telemetry {
    handle: PrometheusHandle,
}

impl Telemetry {
    /// Builds the recorder and installs it globally.
    ///
    /// Fails if a global recorder has already been installed.
    pub fn install() -> anyhow::Result<Self> {
        let (telemetry, recorder) = Self::build();

        metrics::set_global_recorder(recorder)
            .map_err(|_| anyhow::anyhow!("A global metrics recorder is already installed"))
            .context("Failed to install metrics recorder")?;

        tracing::info!(service = SERVICE_NAME, version = SERVICE_VERSION, "Metrics installed");

        Ok(telemetry)
    }

    /// Builds a recorder that is not installed globally.
    ///
    /// Only `app_info` is recorded; request metrics emitted through the [`metrics`]
    /// macros go to whatever recorder is installed globally, if any.
    pub fn detached() -> Self {
        Self::build().0
    }

    fn build() -> (Self, PrometheusRecorder) {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            metrics::describe_gauge!("app_info", SERVICE_DESCRIPTION);
            metrics::gauge!("app_info", "version" => SERVICE_VERSION).set(1.0);
        });

        (Self { handle }, recorder)
    }

    /// Periodically drains histogram samples, so memory stays bounded when nothing scrapes `/metrics`.
    pub fn spawn_upkeep(&self, period: Duration) -> JoinHandle<()> {
        let handle = self.handle.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);

            loop {
                interval.tick().await;
                handle.run_upkeep();
            }
        })
    }

    /// Renders all metrics in the Prometheus text exposition format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Records one inbound request.
pub fn record_http_request(method: String, path: String, status: u16, started: Instant) {
    let status = status.to_string();

    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(started.elapsed().as_secs_f64());
}

/// Records one outbound catalog call. `status` is `None` when no response was received.
pub fn record_catalog_request(operation: &'static str, status: Option<StatusCode>, started: Instant) {
    let status = status
        .map(|status| status.as_u16().to_string())
        .unwrap_or_else(|| "error".to_string());

    metrics::counter!(
        "catalog_requests_total",
        "operation" => operation,
        "status" => status
    )
    .increment(1);

    metrics::histogram!("catalog_request_duration_seconds", "operation" => operation)
        .record(started.elapsed().as_secs_f64());
}
