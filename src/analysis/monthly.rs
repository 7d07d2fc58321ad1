//! Per-user monthly reports.

use chrono::NaiveDate;
use chrono::Timelike;
use serde::Deserialize;
use uuid::Uuid;

use crate::analysis::analyzer::TextAnalyzer;
use crate::lexicon::Lexicon;
use crate::models::MonthlyReport;
use crate::models::MonthlySummary;
use crate::models::ReportPeriod;
use crate::models::SpeechRecord;
use crate::Result;
use crate::SpeechLensError;

/// Parameters of a monthly report request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportRequest {
    /// Case-sensitive substring matched against the user display name
    pub user_name: String,
    pub year: i32,
    pub month: u32,
}

impl MonthlyReportRequest {
    /// Validate the request and resolve the inclusive calendar bounds of the
    /// target month. Fails before any query runs.
    pub fn resolve_period(&self) -> Result<ReportPeriod> {
        if self.user_name.trim().is_empty() {
            return Err(SpeechLensError::validation("userName is required"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(SpeechLensError::validation(format!(
                "month must be between 1 and 12, got {}",
                self.month
            )));
        }

        let start_date = NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| {
            SpeechLensError::validation(format!("invalid year/month: {}-{}", self.year, self.month))
        })?;
        // Last calendar day of the month: the day before the first day of the
        // following month.
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let end_date = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .ok_or_else(|| {
                SpeechLensError::validation(format!(
                    "invalid year/month: {}-{}",
                    self.year, self.month
                ))
            })?;

        Ok(ReportPeriod {
            year: self.year,
            month: self.month,
            start_date,
            end_date,
        })
    }
}

/// Folds one month of speeches into a `MonthlyReport`.
pub struct MonthlyReportBuilder<'a> {
    analyzer: TextAnalyzer<'a>,
}

impl<'a> MonthlyReportBuilder<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            analyzer: TextAnalyzer::new(lexicon),
        }
    }

    /// Build the report over `speeches`, which must already be filtered to
    /// `period` and ordered ascending by timestamp.
    ///
    /// Zero speeches produce a well-formed summary with every count at zero,
    /// including `average_words_per_speech` (the division is guarded).
    pub fn build(&self, period: ReportPeriod, speeches: Vec<SpeechRecord>) -> MonthlyReport {
        let mut summary = MonthlySummary::default();
        let mut meeting_ids: Vec<Uuid> = Vec::new();
        let mut total_words: u64 = 0;
        let mut details = Vec::with_capacity(speeches.len());

        for speech in speeches {
            let annotated = self.analyzer.annotate(speech);
            let record = &annotated.speech;

            summary.total_speeches += 1;
            if !meeting_ids.contains(&record.meeting_id) {
                meeting_ids.push(record.meeting_id);
            }
            summary.emotion_distribution.bump(annotated.analysis.emotion.sentiment);
            // Topic counts are summed per matched category, not presence-flagged
            for (category, count) in annotated.analysis.topics.iter() {
                summary.topic_distribution.add(category.clone(), count);
            }
            summary
                .daily_activity
                .add(record.timestamp.date_naive().to_string(), 1);
            total_words += record.content.split_whitespace().count() as u64;
            summary.time_of_day_distribution.bump(record.timestamp.hour());

            details.push(annotated);
        }

        summary.unique_meetings = meeting_ids.len();
        summary.average_words_per_speech = if summary.total_speeches == 0 {
            0.0
        } else {
            total_words as f64 / summary.total_speeches as f64
        };
        summary.most_active_topics = summary.topic_distribution.ranked();

        MonthlyReport {
            period,
            summary,
            details,
        }
    }
}
