//! Console Host
//!
//! Serves the built Datapulse UI bundle, built with Axum.
//!
//! # Endpoints
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe (UI bundle present)
//! - `GET /health` - Full health status
//!
//! ## Console
//! - `GET /*` - Static assets from the dist directory; any other path
//!   answers with `index.html` so the client router can take over
//!
//! # Example
//!
//! ```rust,ignore
//! use datapulse::config::ServerConfig;
//! use datapulse::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(ServerConfig::default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::ServerError;
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the host router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let console = ServeDir::new(&state.config.dist_dir)
        .fallback(ServeFile::new(state.config.index_file()));
    let cors = cors_layer(&state.config);

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(console)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS policy from the configured origins; permissive when none are set
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new().allow_origin(AllowOrigin::list(parse_origins(&config.cors_origins)))
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect()
}

/// Start the console host
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    let addr = state.config.addr();

    if !state.bundle_present() {
        tracing::warn!(
            "UI bundle not found at {:?}; run `trunk build` in datapulse-ui",
            state.config.index_file()
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Datapulse console listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    tracing::info!("Datapulse console shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX_HTML: &str = "<!DOCTYPE html><title>Datapulse</title>";

    fn create_test_app(with_bundle: bool) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        if with_bundle {
            std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
            std::fs::write(dir.path().join("datapulse-ui.js"), "export default {}").unwrap();
        }

        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let router = build_router(AppState::new(config));

        (router, dir)
    }

    async fn send(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(false);
        let response = send(app, "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _dir) = create_test_app(true);
        let response = send(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_without_bundle() {
        let (app, _dir) = create_test_app(false);
        let response = send(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(true);
        let response = send(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let health: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["assets"], "ok");
        assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_full_without_bundle() {
        let (app, _dir) = create_test_app(false);
        let response = send(app, "/health").await;

        let health: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(health["status"], "degraded");
        assert_eq!(health["assets"], "missing");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (app, _dir) = create_test_app(true);
        let response = send(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_client_route_falls_back_to_index() {
        let (app, _dir) = create_test_app(true);
        let response = send(app, "/finance/pnl").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_index() {
        let (app, _dir) = create_test_app(true);
        let response = send(app, "/no/such/page").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, INDEX_HTML);
    }

    #[tokio::test]
    async fn test_asset_is_served() {
        let (app, _dir) = create_test_app(true);
        let response = send(app, "/datapulse-ui.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::CONTENT_TYPE));
        assert_eq!(body_text(response).await, "export default {}");
    }

    #[test]
    fn test_parse_origins_skips_invalid() {
        let origins = parse_origins(&[
            "http://localhost:8080".to_string(),
            "bad\norigin".to_string(),
        ]);
        assert_eq!(origins, vec![HeaderValue::from_static("http://localhost:8080")]);
    }
}
