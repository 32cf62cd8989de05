//! API module entry
//!
//! Routes requests by method and path, attaches CORS headers for
//! allow-listed origins and emits one access-log entry per request.

mod error;
mod handlers;
mod query;
mod response;
mod types;

pub use error::ApiError;
pub use types::AnalysisResponse;

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{header, Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::logger;
use crate::logger::AccessLogEntry;
use query::QueryParams;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version());
    let origin = header_value(&req, header::ORIGIN);
    let referer = header_value(&req, header::REFERER);
    let user_agent = header_value(&req, header::USER_AGENT);

    let response = dispatch(&method, &path, query.as_deref(), origin.as_deref(), &state);

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.to_string(), method.to_string(), path);
        entry.query = query;
        entry.http_version = http_version.to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = body_size(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.format);
    }

    Ok(response)
}

/// Dispatch by method and path
///
/// Pure over the request line, the `Origin` header and the immutable state,
/// so the full routing surface is exercisable without a connection.
fn dispatch(
    method: &Method,
    path: &str,
    query: Option<&str>,
    origin: Option<&str>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let allowed_origins = &state.config.http.cors_allowed_origins;

    // Preflight carries its own CORS grant headers
    if method == Method::OPTIONS {
        return response::build_preflight_response(origin, allowed_origins);
    }

    let mut resp = if method == Method::GET {
        route_get(path, query, state)
    } else {
        logger::log_warning(&format!("Method not allowed: {method} {path}"));
        response::method_not_allowed()
    };

    response::apply_cors(&mut resp, origin, allowed_origins);
    resp
}

/// Route a GET request by path
fn route_get(path: &str, query: Option<&str>, state: &AppState) -> Response<Full<Bytes>> {
    if path == "/analyze" {
        return handlers::handle_analyze(&QueryParams::parse(query), state);
    }

    let health = &state.config.routes.health;
    if health.enabled && (path == health.liveness_path || path == health.readiness_path) {
        return response::health_response("ok");
    }

    logger::log_api_request("GET", path, 404);
    response::not_found()
}

fn header_value(req: &Request<hyper::body::Incoming>, name: header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}

fn body_size(response: &Response<Full<Bytes>>) -> usize {
    usize::try_from(response.body().size_hint().exact().unwrap_or(0)).unwrap_or(usize::MAX)
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    #[test]
    fn test_get_analyze_routes_to_handler() {
        let state = AppState::test_default();
        let resp = dispatch(
            &Method::GET,
            "/analyze",
            Some("type=VOWELS&text=abc"),
            None,
            &state,
        );
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_unknown_path_is_404() {
        let state = AppState::test_default();
        let resp = dispatch(&Method::GET, "/nope", None, None, &state);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_post_is_405_with_allow_header() {
        let state = AppState::test_default();
        let resp = dispatch(&Method::POST, "/analyze", None, None, &state);
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers().get("Allow").unwrap(), "GET, OPTIONS");
    }

    #[test]
    fn test_health_probes() {
        let state = AppState::test_default();
        let live = dispatch(&Method::GET, "/healthz", None, None, &state);
        let ready = dispatch(&Method::GET, "/readyz", None, None, &state);
        assert_eq!(live.status(), StatusCode::OK);
        assert_eq!(ready.status(), StatusCode::OK);
    }

    #[test]
    fn test_options_preflight_with_allowed_origin() {
        let state = AppState::test_default();
        let resp = dispatch(
            &Method::OPTIONS,
            "/analyze",
            None,
            Some("http://localhost:4200"),
            &state,
        );
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "http://localhost:4200"
        );
    }

    #[test]
    fn test_allowed_origin_gets_cors_on_normal_response() {
        let state = AppState::test_default();
        let resp = dispatch(
            &Method::GET,
            "/analyze",
            Some("type=VOWELS&text=abc"),
            Some("http://localhost:4200"),
            &state,
        );
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "http://localhost:4200"
        );
    }

    #[test]
    fn test_unlisted_origin_gets_no_cors() {
        let state = AppState::test_default();
        let resp = dispatch(
            &Method::GET,
            "/analyze",
            Some("type=VOWELS&text=abc"),
            Some("http://evil.example"),
            &state,
        );
        assert!(resp.headers().get("Access-Control-Allow-Origin").is_none());
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(Version::HTTP_11), "1.1");
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_2), "2");
    }
}
