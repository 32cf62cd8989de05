// Analyze endpoint handler module
// Parameter validation and response shaping for GET /analyze

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::error::ApiError;
use super::query::QueryParams;
use super::response;
use super::types::AnalysisResponse;
use crate::analyzer::{analyze, AnalysisMode, CountResult};
use crate::config::AppState;
use crate::logger;

/// Handle `GET /analyze?type=<MODE>&text=<string>`
pub fn handle_analyze(params: &QueryParams, state: &AppState) -> Response<Full<Bytes>> {
    match validate(params, state.config.analyzer.max_text_length) {
        Ok((mode, text)) => {
            // Blank input short-circuits: the response carries the original
            // untrimmed text and an empty count map
            let character_counts = if text.trim().is_empty() {
                CountResult::default()
            } else {
                analyze(&text, mode)
            };

            let payload = AnalysisResponse {
                character_counts,
                original_text: text,
                analysis_type: mode,
            };

            logger::log_api_request("GET", "/analyze", 200);
            response::json_response(StatusCode::OK, &payload)
        }
        Err(err) => {
            logger::log_api_request("GET", "/analyze", err.status().as_u16());
            response::error_response(&err)
        }
    }
}

/// Validate query parameters in the documented order: `type` presence and
/// validity first, then `text` presence, then `text` length.
fn validate(params: &QueryParams, max_length: usize) -> Result<(AnalysisMode, String), ApiError> {
    let mode = match params.get("type") {
        None => return Err(ApiError::MissingParameter("type")),
        Some(value) => {
            AnalysisMode::from_param(value).ok_or_else(|| ApiError::InvalidModeValue {
                value: value.to_string(),
            })?
        }
    };

    let text = params
        .get("text")
        .ok_or(ApiError::MissingParameter("text"))?;

    if text.chars().count() > max_length {
        return Err(ApiError::PayloadTooLarge {
            max_length,
        });
    }

    Ok((mode, text.to_string()))
}
