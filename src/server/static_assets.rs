//! Embedded web UI assets.
//!
//! In release mode: Assets are embedded into the binary at compile time.
//! In debug mode: rust-embed reads from filesystem (dist/) at runtime.

use axum::{
    body::Body,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Trunk output (WASM, JS, CSS, HTML)
#[derive(RustEmbed)]
#[folder = "dist/"]
#[allow_missing = true]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.wasm"]
#[include = "*.css"]
#[include = "snippets/**/*"]
struct FrontendAssets;

fn is_api_path(path: &str) -> bool {
    path == "api" || path.starts_with("api/")
}

/// Serve embedded frontend assets.
///
/// 1. `api/...` paths the gateway does not forward are 404s
/// 2. Exact file match (e.g. /style.css, /verdict-frontend_bg.wasm)
/// 3. Anything else gets index.html
pub async fn serve_frontend(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if is_api_path(path) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let asset_path = if path.is_empty() { "index.html" } else { path };

    let response = match FrontendAssets::get(asset_path) {
        Some(content) => {
            let mime = mime_guess::from_path(asset_path).first_or_octet_stream();
            // everything but index.html is hashed by trunk
            let cache_control = if asset_path == "index.html" {
                "no-cache"
            } else {
                "public, max-age=31536000"
            };

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::CACHE_CONTROL, cache_control)
                .body(Body::from(content.data))
        }
        None => match FrontendAssets::get("index.html") {
            Some(index) => Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/html")
                .header(header::CACHE_CONTROL, "no-cache")
                .body(Body::from(index.data)),
            None => Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::from(
                    "Frontend assets not found. Run 'trunk build --release' first.",
                )),
        },
    };

    response.unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
