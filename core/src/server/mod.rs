//! Static dev server for the built frontend.
//!
//! Serves the trunk output directory and falls back to `index.html` for
//! every unknown path so client-side routes survive a reload.
//!
//! # Endpoints
//!
//! | Method | Path      | Description                         |
//! |--------|-----------|-------------------------------------|
//! | GET    | `/health` | Health check                        |
//! | GET    | `/*`      | Static asset or SPA entry document  |

use axum::{
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::{ServeConfig, APP_NAME};
use crate::error::ServerResult;
use crate::routes::Route;

/// Build the application router.
pub fn router(config: &ServeConfig) -> Router {
    // Permissive CORS for local development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let assets = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health))
        .fallback_service(assets)
        .layer(cors)
}

/// Bind on all interfaces and serve until the process stops.
pub async fn start_server(config: ServeConfig) -> ServerResult<()> {
    config.validate()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    log::info!("Serving {} on http://localhost:{}", config.dist_dir.display(), config.port);
    println!("🚀 {} dev server running on http://localhost:{}", APP_NAME, config.port);
    println!("   GET /health - Health check");
    println!("   GET /*      - Frontend from {}", config.dist_dir.display());

    serve_on(listener, config).await
}

/// Serve on an already bound listener.
pub async fn serve_on(listener: TcpListener, config: ServeConfig) -> ServerResult<()> {
    axum::serve(listener, router(&config)).await?;
    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    let routes: Vec<&str> = Route::ALL.iter().map(|r| r.path()).collect();
    Json(json!({
        "status": "ok",
        "service": "medipredict",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": routes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    async fn spawn_server() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html>medipredict</html>").unwrap();
        fs::write(dir.path().join("app.css"), "body{}").unwrap();

        let config = ServeConfig::from_vars(None, dir.path().to_str()).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(serve_on(listener, config));
        (dir, base)
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, base) = spawn_server().await;
        let body: Value = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["routes"].as_array().unwrap().len(), Route::ALL.len());
    }

    #[tokio::test]
    async fn test_static_asset_and_spa_fallback() {
        let (_dir, base) = spawn_server().await;

        let css = reqwest::get(format!("{}/app.css", base)).await.unwrap();
        assert!(css.status().is_success());
        assert_eq!(css.text().await.unwrap(), "body{}");

        let page = reqwest::get(format!("{}/detailed-report", base)).await.unwrap();
        assert!(page.status().is_success());
        assert!(page.text().await.unwrap().contains("medipredict"));
    }
}
