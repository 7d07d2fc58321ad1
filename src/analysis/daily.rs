//! Per-day rollups of speech activity.

use chrono::NaiveDate;

use crate::analysis::ranking::CountTable;
use crate::models::DailySummary;
use crate::models::KeywordCount;
use crate::models::SpeechRecord;

/// Upper bound on ranked keywords carried per day
const TOP_KEYWORD_LIMIT: usize = 10;

/// Minimum token length counted by the keyword ranker
const MIN_KEYWORD_CHARS: usize = 2;

#[derive(Debug, Default)]
struct DayBucket {
    total_speeches: u64,
    meetings: Vec<String>,
    speeches_by_user: CountTable<String>,
    keywords: CountTable<String>,
}

/// Groups speeches by calendar date and folds per-day statistics.
pub struct DailyAggregator;

impl DailyAggregator {
    /// Fold `speeches` into one summary per distinct calendar date.
    ///
    /// Input is expected ascending by timestamp; buckets and their contents
    /// keep first-seen order, which is what makes keyword tie-breaks
    /// deterministic. An empty input yields an empty vector.
    ///
    /// Keywords are whitespace tokens of at least two characters, counted
    /// per occurrence. This is intentionally different from the topic
    /// extractor's presence counting.
    pub fn summarize(speeches: &[SpeechRecord]) -> Vec<DailySummary> {
        let mut buckets: Vec<(NaiveDate, DayBucket)> = Vec::new();

        for speech in speeches {
            let date = speech.timestamp.date_naive();
            let idx = match buckets.iter().position(|(d, _)| *d == date) {
                Some(idx) => idx,
                None => {
                    buckets.push((date, DayBucket::default()));
                    buckets.len() - 1
                }
            };
            let bucket = &mut buckets[idx].1;

            bucket.total_speeches += 1;
            if !bucket.meetings.contains(&speech.meeting_title) {
                bucket.meetings.push(speech.meeting_title.clone());
            }
            bucket.speeches_by_user.add(speech.user_name.clone(), 1);
            for word in speech
                .content
                .split_whitespace()
                .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
            {
                bucket.keywords.add(word.to_string(), 1);
            }
        }

        buckets
            .into_iter()
            .map(|(date, bucket)| {
                let top_keywords = bucket
                    .keywords
                    .ranked()
                    .iter()
                    .take(TOP_KEYWORD_LIMIT)
                    .map(|(word, count)| KeywordCount {
                        word: word.clone(),
                        count,
                    })
                    .collect();

                DailySummary {
                    date,
                    total_speeches: bucket.total_speeches,
                    unique_meetings_count: bucket.meetings.len(),
                    meetings: bucket.meetings,
                    speeches_by_user: bucket.speeches_by_user,
                    top_keywords,
                }
            })
            .collect()
    }
}
