use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use rust_embed::RustEmbed;

/// Appended to asset URLs so browsers refetch them after an upgrade.
pub const ASSETS_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

fn cache_control_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "ico") => "public, max-age=86400",
        _ => "public, max-age=3600",
    }
}

/// Serves static files from the embedded assets
pub async fn default_handler(uri: axum::http::Uri) -> axum::response::Response {
    let path_str = uri.path().trim_start_matches('/');
    let asset_path = path_str.strip_prefix("assets/").unwrap_or_default();

    if let Some(content) = Assets::get(asset_path) {
        let mime = mime_guess::from_path(asset_path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime.to_string()),
                (header::CACHE_CONTROL, cache_control_for(asset_path).to_string()),
            ],
            content.data,
        )
            .into_response();
    }

    (
        StatusCode::NOT_FOUND,
        [
            (header::CONTENT_TYPE, "text/plain".to_string()),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        axum::body::Bytes::from_static(b"404 Not Found"),
    )
        .into_response()
}
