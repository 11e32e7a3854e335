//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the stage endpoints
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Dispatch events to the viewer and origin stage handlers

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::PrerenderConfig;
use crate::edge::{EdgeEvent, EdgeRequest};
use crate::http::response::ApiError;
use crate::pipeline::{handle_origin_request, handle_viewer_request};
use crate::render::{HttpRenderClient, RenderError};
use crate::routing::OriginRouter;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<OriginRouter<HttpRenderClient>>,
}

/// Local invocation service for both stages.
pub struct HttpServer {
    router: Router,
    config: PrerenderConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: PrerenderConfig) -> Result<Self, RenderError> {
        let client = HttpRenderClient::new(&config.renderer, &config.retries)?;
        let state = AppState {
            router: Arc::new(OriginRouter::from_config(client, &config)),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &PrerenderConfig, state: AppState) -> Router {
        let layers = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )));

        Router::new()
            .route("/viewer-request", post(viewer_handler))
            .route("/origin-request", post(origin_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(layers)
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            renderer = %self.config.renderer.domain,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn viewer_handler(Json(event): Json<EdgeEvent>) -> Result<Json<EdgeRequest>, ApiError> {
    Ok(Json(handle_viewer_request(event)?))
}

async fn origin_handler(
    State(state): State<AppState>,
    Json(event): Json<EdgeEvent>,
) -> Result<Json<EdgeRequest>, ApiError> {
    Ok(Json(handle_origin_request(event, &state.router).await?))
}

async fn health_handler() -> &'static str {
    "ok"
}
