//! HTTP Server configuration and startup.

use std::future::Future;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use demo_telemetry::make_request_span;
use demo_types::PaymentInfoProvider;

use super::handlers::{self, AppState};
use crate::AccountService;

/// HTTP Server for the Account API.
pub struct HttpServer<P: PaymentInfoProvider> {
    state: Arc<AppState<P>>,
}

impl<P: PaymentInfoProvider> HttpServer<P> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: AccountService<P>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(handlers::openapi))
            .route("/accounts/{id}", get(handlers::get_account_info::<P>))
            .route("/actuator/refresh", post(handlers::refresh::<P>))
            .layer(metrics)
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .with_state(self.state.clone())
    }

    /// Binds `addr` and serves until `shutdown` resolves.
    pub async fn run<F>(self, addr: &str, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serves on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Account server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
