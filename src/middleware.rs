//! Request logging and cache-suppression middleware.

use axum::{
    body::Body,
    http::{HeaderValue, Request, header},
    middleware::Next,
    response::Response,
};
use nanoid::nanoid;
use std::time::Instant;
use tracing::info;

use crate::colors::colored_id;

/// `Cache-Control` value attached to every response
pub const CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";
/// `Pragma` value attached to every response
pub const PRAGMA: &str = "no-cache";
/// `Expires` value attached to every response
pub const EXPIRES: &str = "0";

/// Middleware that stamps cache-suppression headers on every response
///
/// Delegates to the inner service first, then inserts the three headers
/// into whatever came back. Applies to every status code, so 404s and
/// 405s are just as uncacheable as successful file responses.
pub async fn suppress_caching(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL));
    headers.insert(header::PRAGMA, HeaderValue::from_static(PRAGMA));
    headers.insert(header::EXPIRES, HeaderValue::from_static(EXPIRES));
    response
}

/// Middleware that logs incoming requests and assigns them unique colored IDs
///
/// This middleware:
/// 1. Generates a short nanoid for each request
/// 2. Records the start time for latency calculation
/// 3. Logs the initial request with colored ID
/// 4. Stores the ID and start time in request extensions for downstream handlers
pub async fn log_requests(mut req: Request<Body>, next: Next) -> Response {
    let id = nanoid!(5);
    let method = req.method().clone();
    let uri = req.uri().clone();

    req.extensions_mut().insert(id.clone());
    req.extensions_mut().insert(Instant::now());

    info!("{} → {} {}", colored_id(&id), method, uri.path());
    next.run(req).await
}
