//! Shared test fixtures: record builders and in-memory stores.

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::database::SpeechStore;
use crate::models::SortOrder;
use crate::models::SpeechQuery;
use crate::models::SpeechRecord;
use crate::Result;
use crate::SpeechLensError;

/// Build a speech record at `timestamp` (RFC 3339) with defaults elsewhere
pub fn speech_at(timestamp: &str, user_name: &str, content: &str) -> SpeechRecord {
    SpeechRecord {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        user_name: user_name.to_string(),
        meeting_id: Uuid::nil(),
        meeting_title: "定例会議".to_string(),
        timestamp: timestamp
            .parse::<DateTime<Utc>>()
            .expect("fixture timestamp must be RFC 3339"),
        content: content.to_string(),
    }
}

/// In-memory `SpeechStore` applying the same filter semantics as the
/// database: substring containment, inclusive day bounds, timestamp order.
pub struct MemoryStore {
    pub speeches: Vec<SpeechRecord>,
}

impl MemoryStore {
    pub fn new(speeches: Vec<SpeechRecord>) -> Self {
        Self { speeches }
    }
}

#[async_trait]
impl SpeechStore for MemoryStore {
    async fn list_speeches(&self, query: &SpeechQuery) -> Result<Vec<SpeechRecord>> {
        let mut matched: Vec<SpeechRecord> = self
            .speeches
            .iter()
            .filter(|s| {
                query
                    .user_name_contains
                    .as_deref()
                    .map_or(true, |name| s.user_name.contains(name))
                    && query
                        .content_contains
                        .as_deref()
                        .map_or(true, |text| s.content.contains(text))
                    && query.meeting_id.map_or(true, |id| s.meeting_id == id)
                    && query
                        .from_day
                        .map_or(true, |day| s.timestamp.date_naive() >= day)
                    && query
                        .to_day
                        .map_or(true, |day| s.timestamp.date_naive() <= day)
            })
            .cloned()
            .collect();
        matched.sort_by_key(|s| s.timestamp);
        if query.order == SortOrder::Descending {
            matched.reverse();
        }
        Ok(matched)
    }
}

/// A store whose fetch always fails, for upstream-error propagation tests
pub struct FailingStore;

#[async_trait]
impl SpeechStore for FailingStore {
    async fn list_speeches(&self, _query: &SpeechQuery) -> Result<Vec<SpeechRecord>> {
        Err(SpeechLensError::Custom("connection refused".to_string()))
    }
}
