// API response type module

use serde::Serialize;

use crate::analyzer::{AnalysisMode, CountResult};

/// Result payload of a successful `/analyze` call
///
/// `originalText` carries the raw text exactly as submitted, not the
/// case-folded form the analyzer scanned.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub character_counts: CountResult,
    pub original_text: String,
    pub analysis_type: AnalysisMode,
}
