use std::net::SocketAddr;

use anyhow::Context;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    decompression::RequestDecompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use crate::{
    catalog::CatalogClient,
    config::ServerConfig,
    middleware::{
        method_not_allowed::method_not_allowed, not_found::not_found,
        record_http_metrics::record_http_metrics, trace_response_body::trace_response_body,
    },
    route,
    state::ApiState,
    telemetry::{Telemetry, SERVICE_NAME, SERVICE_VERSION, UPKEEP_PERIOD},
};

/// Builds the complete application router around `state`.
pub fn app(state: ApiState, trace_response_body_enabled: bool) -> Router {
    let mut app = route::app()
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            method_not_allowed::<ApiState>,
        ));

    if trace_response_body_enabled {
        app = app.layer(middleware::from_fn_with_state(
            state.clone(),
            trace_response_body,
        ));
    }

    app.layer(middleware::from_fn(record_http_metrics))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
                )
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
}

pub struct Server {
    config: ServerConfig,
    telemetry: Telemetry,
}

impl Server {
    /// `telemetry` must be created once per process, see [`Telemetry::install`].
    pub fn new(config: ServerConfig, telemetry: Telemetry) -> Self {
        Self { config, telemetry }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        let catalog = CatalogClient::new(self.config.catalog.base_url.clone(), http_client);

        let upkeep = self.telemetry.spawn_upkeep(UPKEEP_PERIOD);

        let state = ApiState::new(self.config.error_verbosity, catalog, self.telemetry);
        let app = app(state, self.config.trace_response_body);

        tracing::info!(
            addr = %self.config.socket_address,
            catalog = %self.config.catalog.base_url,
            service = SERVICE_NAME,
            version = SERVICE_VERSION,
            "Starting server"
        );

        let listener = TcpListener::bind(&self.config.socket_address)
            .await
            .context("Bind failed")?;

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

        upkeep.abort();

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");

        tracing::info!("CTRL+C received");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;

        tracing::info!("SIGTERM received");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
