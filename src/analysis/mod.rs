//! The analytics engine: classifier, ranking and aggregation.
//!
//! Everything here is a pure fold over records plus the immutable lexicon.
//! The only suspension point is the single store fetch per request; after
//! that, computation is synchronous with no further I/O.

pub mod analyzer;
pub mod daily;
pub mod monthly;
pub mod ranking;

pub use analyzer::TextAnalyzer;
pub use daily::DailyAggregator;
pub use monthly::MonthlyReportBuilder;
pub use monthly::MonthlyReportRequest;
pub use ranking::CountTable;

use chrono::NaiveDate;
use tracing::debug;

use crate::database::SpeechStore;
use crate::lexicon::Lexicon;
use crate::models::DailySummary;
use crate::models::MonthlyReport;
use crate::models::SortOrder;
use crate::models::SpeechQuery;
use crate::Result;
use crate::SpeechLensError;

/// Optional filters of a daily summary request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailySummaryRequest {
    pub user_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DailySummaryRequest {
    fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(SpeechLensError::validation(format!(
                    "endDate {end} is before startDate {start}"
                )));
            }
        }
        Ok(())
    }
}

/// Produce per-day summaries: one store fetch, then a pure fold.
pub async fn daily_summaries(
    store: &dyn SpeechStore,
    request: &DailySummaryRequest,
) -> Result<Vec<DailySummary>> {
    request.validate()?;

    let query = SpeechQuery {
        user_name_contains: request.user_name.clone(),
        from_day: request.start_date,
        to_day: request.end_date,
        order: SortOrder::Ascending,
        ..SpeechQuery::default()
    };
    let speeches = store.list_speeches(&query).await?;
    debug!("daily summaries folding {} speeches", speeches.len());

    Ok(DailyAggregator::summarize(&speeches))
}

/// Produce one user's monthly report: validate, fetch once, fold.
pub async fn monthly_report(
    store: &dyn SpeechStore,
    lexicon: &Lexicon,
    request: &MonthlyReportRequest,
) -> Result<MonthlyReport> {
    let period = request.resolve_period()?;

    let query = SpeechQuery {
        user_name_contains: Some(request.user_name.clone()),
        from_day: Some(period.start_date),
        to_day: Some(period.end_date),
        order: SortOrder::Ascending,
        ..SpeechQuery::default()
    };
    let speeches = store.list_speeches(&query).await?;
    debug!(
        "monthly report for {:?} ({}-{:02}) folding {} speeches",
        request.user_name,
        period.year,
        period.month,
        speeches.len()
    );

    Ok(MonthlyReportBuilder::new(lexicon).build(period, speeches))
}
