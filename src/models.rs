use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::analysis::ranking::CountTable;

/// One utterance tied to a user and a meeting.
///
/// Owned by the store; `user_name` and `meeting_title` arrive denormalized
/// (already joined in). An untitled meeting carries the empty string; the
/// placeholder text shown for it is the renderer's concern, not ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub meeting_id: Uuid,
    pub meeting_title: String,
    pub timestamp: DateTime<Utc>,
    pub content: String,
}

/// Sentiment label derived from the sign of the raw emotion score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Normalized emotion score in [-1, 1] plus its sign-derived label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub score: f64,
    pub sentiment: Sentiment,
}

/// Per-utterance topic matches: category name to keyword-presence count.
/// Categories with zero matches are omitted, not zero-valued.
pub type TopicMatch = CountTable<String>;

/// Classifier output for one utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechAnalysis {
    pub emotion: EmotionScore,
    pub topics: TopicMatch,
}

/// A speech record together with its classifier output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSpeech {
    #[serde(flatten)]
    pub speech: SpeechRecord,
    pub analysis: SpeechAnalysis,
}

/// One ranked keyword of a daily summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: u64,
}

/// Per-day rollup of activity, participants and keyword frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_speeches: u64,
    pub unique_meetings_count: usize,
    pub meetings: Vec<String>,
    pub speeches_by_user: CountTable<String>,
    /// At most 10 entries, descending by occurrence count
    pub top_keywords: Vec<KeywordCount>,
}

/// Speech counts per sentiment label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionDistribution {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl EmotionDistribution {
    pub fn bump(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }
}

/// Speech counts per time-of-day bucket.
///
/// Buckets partition the 24-hour day: [6,12) morning, [12,18) afternoon,
/// [18,24) evening, [0,6) night.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayDistribution {
    pub morning: u64,
    pub afternoon: u64,
    pub evening: u64,
    pub night: u64,
}

impl TimeOfDayDistribution {
    pub fn bump(&mut self, hour: u32) {
        match hour {
            6..=11 => self.morning += 1,
            12..=17 => self.afternoon += 1,
            18..=23 => self.evening += 1,
            _ => self.night += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.morning + self.afternoon + self.evening + self.night
    }
}

/// Aggregated statistics of one user's month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total_speeches: u64,
    pub unique_meetings: usize,
    pub emotion_distribution: EmotionDistribution,
    pub topic_distribution: CountTable<String>,
    pub daily_activity: CountTable<String>,
    pub average_words_per_speech: f64,
    /// Full topic ranking, descending by summed match count
    pub most_active_topics: CountTable<String>,
    pub time_of_day_distribution: TimeOfDayDistribution,
}

/// Resolved calendar bounds of a monthly report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    pub year: i32,
    pub month: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Monthly report: resolved period, folded summary and annotated detail list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub period: ReportPeriod,
    pub summary: MonthlySummary,
    pub details: Vec<AnnotatedSpeech>,
}

/// Timestamp ordering of a speech listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Filter criteria understood by the speech store.
///
/// Day bounds are inclusive calendar dates; the store expands them to
/// timestamp ranges covering the whole day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeechQuery {
    /// Case-sensitive substring match against the user display name
    pub user_name_contains: Option<String>,
    /// Substring match against the utterance text
    pub content_contains: Option<String>,
    pub meeting_id: Option<Uuid>,
    pub from_day: Option<NaiveDate>,
    pub to_day: Option<NaiveDate>,
    pub order: SortOrder,
}

impl SpeechQuery {
    /// Restrict the query to a single calendar day
    pub fn on_day(day: NaiveDate) -> Self {
        Self {
            from_day: Some(day),
            to_day: Some(day),
            ..Self::default()
        }
    }
}
