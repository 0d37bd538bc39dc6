//! HTTP transport - maps the feedback REST surface onto the CRUD service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /feedback` - filtered, sorted, paginated listing.
//! - `GET /feedback/:id` - one record, or 404 `{ "error": "Feedback not found" }`.
//! - `POST /feedback` - create; 201 `{ message, feedback }` or 400 `{ error, details }`.
//! - `PUT /feedback/:id` - update `content` / `status`; 200, 400 or 404.
//! - `DELETE /feedback/:id` - 200 `{ message }` or 404.
//! - `GET /feedback/sub/categories`, `GET /feedback/sub/statuses` - the enumerations.
//! - `GET /health` - `{ "ok": true }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use feedback_board::{http, FeedbackService, InMemoryFeedbackStore};
//!
//! let service = Arc::new(FeedbackService::new(InMemoryFeedbackStore::seeded()));
//!
//! // Compose with other axum routes
//! let app = http::router(service.clone());
//!
//! // Or serve directly under /api
//! http::serve(service, "0.0.0.0:3001", "/api").await?;
//! ```

mod handlers;
mod response;

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::service::FeedbackService;
use crate::store::FeedbackStore;

/// Build an axum `Router` serving the feedback routes at the root.
pub fn router<S: FeedbackStore + 'static>(service: Arc<FeedbackService<S>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/feedback",
            get(handlers::list::<S>).post(handlers::create::<S>),
        )
        .route("/feedback/sub/categories", get(handlers::categories::<S>))
        .route("/feedback/sub/statuses", get(handlers::statuses::<S>))
        .route(
            "/feedback/:id",
            get(handlers::get_one::<S>)
                .put(handlers::update::<S>)
                .delete(handlers::delete::<S>),
        )
        .with_state(service)
}

/// The full application: routes mounted under `prefix` (e.g. `"/api"`, or
/// `""` for the root) with CORS and request tracing.
pub fn app<S: FeedbackStore + 'static>(service: Arc<FeedbackService<S>>, prefix: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let routes = router(service);
    let routes = if prefix.is_empty() {
        routes
    } else {
        Router::new().nest(prefix, routes)
    };

    routes.layer(cors).layer(TraceLayer::new_for_http())
}

/// Serve the application at `addr` until Ctrl+C or SIGTERM.
pub async fn serve<S: FeedbackStore + 'static>(
    service: Arc<FeedbackService<S>>,
    addr: &str,
    prefix: &str,
) -> Result<(), std::io::Error> {
    let app = app(service, prefix);

    let listener = TcpListener::bind(addr).await?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
