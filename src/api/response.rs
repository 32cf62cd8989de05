// API response building module
// Builders for JSON and plain-text responses, decoupled from handler
// logic, plus CORS headers for the configured origin allow-list

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::error::ApiError;
use crate::logger;

/// Build a JSON response with the given status
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(json) => json,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return fallback_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"Internal server error"}"#,
            );
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Build a plain-text response with the given status
pub fn text_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(message.to_string())))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build response: {e}"));
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Map a validation error to its plain-text response
///
/// Error bodies are raw strings, not JSON; only the success path and the
/// service-level responses (404, health) are JSON.
pub fn error_response(err: &ApiError) -> Response<Full<Bytes>> {
    text_response(err.status(), &err.to_string())
}

/// 404 Not Found response listing the available endpoints
pub fn not_found() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(
            r#"{"error":"Not Found","available_endpoints":["/analyze","/healthz","/readyz"]}"#,
        )))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Not Found"))))
}

/// 405 Method Not Allowed response
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Method Not Allowed"))))
}

/// Health probe response
pub fn health_response(status: &str) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &serde_json::json!({ "status": status }))
}

/// Build an OPTIONS preflight response
///
/// CORS grant headers are only attached when the request origin is on the
/// configured allow-list; other origins get the bare 204.
pub fn build_preflight_response(
    origin: Option<&str>,
    allowed_origins: &[String],
) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "GET, OPTIONS");

    if let Some(origin) = origin.filter(|o| allowed_origins.iter().any(|a| a == o)) {
        builder = builder
            .header("Access-Control-Allow-Origin", origin)
            .header("Access-Control-Allow-Methods", "GET, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "3600")
            .header("Vary", "Origin");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to build response: {e}"));
        Response::new(Full::new(Bytes::new()))
    })
}

/// Append CORS headers when the request origin is on the allow-list
pub fn apply_cors(
    response: &mut Response<Full<Bytes>>,
    origin: Option<&str>,
    allowed_origins: &[String],
) {
    let Some(origin) = origin.filter(|o| allowed_origins.iter().any(|a| a == o)) else {
        return;
    };
    if let Ok(value) = HeaderValue::from_str(origin) {
        let headers = response.headers_mut();
        headers.insert("Access-Control-Allow-Origin", value);
        headers.insert("Vary", HeaderValue::from_static("Origin"));
    }
}

fn fallback_response(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from(body))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow_list() -> Vec<String> {
        vec!["http://localhost:4200".to_string()]
    }

    #[test]
    fn test_apply_cors_for_allowed_origin() {
        let mut response = health_response("ok");
        apply_cors(&mut response, Some("http://localhost:4200"), &allow_list());
        assert_eq!(
            response.headers().get("Access-Control-Allow-Origin").unwrap(),
            "http://localhost:4200"
        );
        assert_eq!(response.headers().get("Vary").unwrap(), "Origin");
    }

    #[test]
    fn test_apply_cors_skips_unlisted_origin() {
        let mut response = health_response("ok");
        apply_cors(&mut response, Some("http://evil.example"), &allow_list());
        assert!(response.headers().get("Access-Control-Allow-Origin").is_none());
    }

    #[test]
    fn test_apply_cors_without_origin_header() {
        let mut response = health_response("ok");
        apply_cors(&mut response, None, &allow_list());
        assert!(response.headers().get("Access-Control-Allow-Origin").is_none());
    }

    #[test]
    fn test_preflight_for_allowed_origin() {
        let response = build_preflight_response(Some("http://localhost:4200"), &allow_list());
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Methods")
                .unwrap(),
            "GET, OPTIONS"
        );
        assert_eq!(
            response.headers().get("Access-Control-Max-Age").unwrap(),
            "3600"
        );
    }

    #[test]
    fn test_preflight_for_unlisted_origin_is_bare() {
        let response = build_preflight_response(Some("http://evil.example"), &allow_list());
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get("Access-Control-Allow-Origin").is_none());
    }
}
