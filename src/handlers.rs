//! HTTP request handlers.

use axum::{
    body::Body,
    extract::{Extension, State},
    http::{HeaderValue, StatusCode, Uri, header},
    response::Response,
};
use owo_colors::OwoColorize;
use percent_encoding::percent_decode_str;
use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
    sync::Arc,
    time::Instant,
};
use tokio::fs;
use tracing::info;

use crate::colors::colored_id;
use crate::state::AppState;

/// Maps a request path to a relative path safe to join onto the root
///
/// Percent-decodes the path so encoded filenames (spaces, non-ASCII)
/// reach files on disk, then keeps only normal components. A path
/// containing `..`, a filesystem root, or a drive prefix after
/// decoding is rejected outright, so no request can resolve to a file
/// outside the serving root.
pub fn sanitize_path(request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;
    let trimmed = decoded.trim_start_matches('/');
    let mut sanitized = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => sanitized.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(sanitized)
}

/// Handles static file requests with proper content-type detection and logging
///
/// Implements several key behaviors:
/// - Path sanitization so requests stay inside the serving root
/// - Automatic index.html serving for directory requests
/// - Correct MIME type detection using file extension
/// - Detailed latency tracking from request start
/// - Color-coded logging with consistent request IDs
pub async fn serve_static(
    State(state): State<Arc<AppState>>,
    Extension(id): Extension<String>,
    Extension(start_time): Extension<Instant>,
    uri: Uri,
) -> Result<Response, StatusCode> {
    let Some(relative_path) = sanitize_path(uri.path()) else {
        let latency = start_time.elapsed();
        info!(
            "{} ← {} {} ({}ms)",
            colored_id(&id),
            "STATIC".green(),
            StatusCode::NOT_FOUND,
            latency.as_millis()
        );
        return Err(StatusCode::NOT_FOUND);
    };
    let mut file_path = state.root_dir.join(relative_path);

    if file_path.is_dir() {
        file_path.push("index.html");
    }

    match fs::read(&file_path).await {
        Ok(content) => {
            let mime_type = mime_guess::from_path(&file_path).first_or_octet_stream();
            let content_length = content.len();
            let mut response = Response::new(Body::from(content));
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_str(mime_type.as_ref()).unwrap(),
            );
            response
                .headers_mut()
                .insert(header::CONTENT_LENGTH, HeaderValue::from(content_length));

            let latency = start_time.elapsed();
            info!(
                "{} ← {} {} ({}ms)",
                colored_id(&id),
                "STATIC".green(),
                response.status(),
                latency.as_millis()
            );
            Ok(response)
        }
        Err(err) => {
            // A missing entry is routine; anything else (permissions,
            // file vanished mid-read) is a server-side failure.
            let status = match err.kind() {
                ErrorKind::NotFound | ErrorKind::NotADirectory => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let latency = start_time.elapsed();
            info!(
                "{} ← {} {} ({}ms)",
                colored_id(&id),
                "STATIC".green(),
                status,
                latency.as_millis()
            );
            Err(status)
        }
    }
}
