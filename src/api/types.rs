//! API request and response types

use serde::Deserialize;
use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query parameters of GET /api/speeches
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechListParams {
    /// Substring match against the utterance text
    #[serde(default)]
    pub search: Option<String>,
    /// Single calendar day, YYYY-MM-DD
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    /// Meeting id filter
    #[serde(default)]
    pub meeting: Option<String>,
}

/// Query parameters of GET /api/summaries/daily
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummaryParams {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Query parameters of GET /api/reports/monthly.
///
/// Year and month stay strings here so that missing and unparsable values
/// both surface as validation errors, not deserialization rejections.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportParams {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
}
