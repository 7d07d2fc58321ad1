/// API request handlers
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::analysis;
use crate::analysis::DailySummaryRequest;
use crate::analysis::MonthlyReportRequest;
use crate::api::types::ApiResponse;
use crate::api::types::DailySummaryParams;
use crate::api::types::HealthResponse;
use crate::api::types::MonthlyReportParams;
use crate::api::types::SpeechListParams;
use crate::database::Database;
use crate::database::SpeechStore;
use crate::lexicon::Lexicon;
use crate::models::DailySummary;
use crate::models::MonthlyReport;
use crate::models::SortOrder;
use crate::models::SpeechQuery;
use crate::models::SpeechRecord;
use crate::Result;
use crate::SpeechLensError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<Database>,
    pub lexicon: Arc<Lexicon>,
}

/// Health check handler
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

fn parse_date(value: &str, param: &str) -> Result<NaiveDate> {
    NaiveDate::from_str(value)
        .map_err(|_| SpeechLensError::validation(format!("{param} is not a valid date: {value}")))
}

/// List speeches (GET /api/speeches)
pub async fn list_speeches(
    State(state): State<AppState>,
    Query(params): Query<SpeechListParams>,
) -> Result<Json<ApiResponse<Vec<SpeechRecord>>>> {
    info!("GET /api/speeches");

    let day = params
        .day
        .as_deref()
        .map(|value| parse_date(value, "day"))
        .transpose()?;
    let meeting_id = params
        .meeting
        .as_deref()
        .map(|value| {
            Uuid::from_str(value).map_err(|_| {
                SpeechLensError::validation(format!("meeting is not a valid id: {value}"))
            })
        })
        .transpose()?;

    let query = SpeechQuery {
        user_name_contains: params.user_name,
        content_contains: params.search,
        meeting_id,
        from_day: day,
        to_day: day,
        // Listings read newest-first; the analytics folds ask for ascending
        order: SortOrder::Descending,
    };
    let speeches = state.database.list_speeches(&query).await?;

    Ok(Json(ApiResponse::success(speeches)))
}

/// Daily summaries (GET /api/summaries/daily)
pub async fn daily_summaries(
    State(state): State<AppState>,
    Query(params): Query<DailySummaryParams>,
) -> Result<Json<ApiResponse<Vec<DailySummary>>>> {
    info!("GET /api/summaries/daily");

    let request = DailySummaryRequest {
        user_name: params.user_name,
        start_date: params
            .start_date
            .as_deref()
            .map(|value| parse_date(value, "startDate"))
            .transpose()?,
        end_date: params
            .end_date
            .as_deref()
            .map(|value| parse_date(value, "endDate"))
            .transpose()?,
    };
    let summaries = analysis::daily_summaries(state.database.as_ref(), &request).await?;

    Ok(Json(ApiResponse::success(summaries)))
}

fn required<'a>(value: Option<&'a str>, param: &str) -> Result<&'a str> {
    value.ok_or_else(|| SpeechLensError::validation(format!("{param} is required")))
}

/// Monthly report for one user (GET /api/reports/monthly)
pub async fn monthly_report(
    State(state): State<AppState>,
    Query(params): Query<MonthlyReportParams>,
) -> Result<Json<ApiResponse<MonthlyReport>>> {
    info!("GET /api/reports/monthly");

    let user_name = required(params.user_name.as_deref(), "userName")?;
    let year = required(params.year.as_deref(), "year")?
        .parse::<i32>()
        .map_err(|_| SpeechLensError::validation("year must be a number"))?;
    let month = required(params.month.as_deref(), "month")?
        .parse::<u32>()
        .map_err(|_| SpeechLensError::validation("month must be a number"))?;

    let request = MonthlyReportRequest {
        user_name: user_name.to_string(),
        year,
        month,
    };
    let report =
        analysis::monthly_report(state.database.as_ref(), &state.lexicon, &request).await?;

    Ok(Json(ApiResponse::success(report)))
}
