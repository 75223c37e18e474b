use anyhow::Context;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::Config, handlers, pages::ROUTES};

/// JSON API router. CORS is permissive on every path, including 404s.
pub fn backend_router() -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::root::hello).fallback(handlers::not_found),
        )
        .route(
            "/health",
            get(handlers::health::check).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        // Must come after the fallbacks so it wraps them too
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Page router built from the route table.
pub fn frontend_router() -> Router {
    ROUTES
        .iter()
        .fold(Router::new(), |router, &(path, page)| {
            router.route(path, get(move || handlers::pages::show(page)))
        })
        .fallback(handlers::pages::not_found)
        .layer(TraceLayer::new_for_http())
}

pub async fn bind(config: &Config) -> anyhow::Result<TcpListener> {
    let addr = config.socket_addr();
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))
}

/// Serves `router` until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
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

    tracing::info!("shutdown signal received, draining connections");
}
