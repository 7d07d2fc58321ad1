use chrono::Duration;
use chrono::NaiveTime;

use super::Database;
use crate::models::SortOrder;
use crate::models::SpeechQuery;
use crate::models::SpeechRecord;
use crate::Result;

impl Database {
    /// List speeches with filters, user and meeting names joined in
    pub async fn query_speeches(&self, query: &SpeechQuery) -> Result<Vec<SpeechRecord>> {
        // Inclusive day bounds expand to [start-of-day, start-of-next-day)
        let from_ts = query
            .from_day
            .map(|day| day.and_time(NaiveTime::MIN).and_utc());
        let until_ts = query
            .to_day
            .map(|day| day.and_time(NaiveTime::MIN).and_utc() + Duration::days(1));

        let mut conditions = vec!["1=1".to_string()];
        let mut param_idx = 1;

        if query.user_name_contains.is_some() {
            // LIKE, not ILIKE: name containment is case-sensitive
            conditions.push(format!("u.name LIKE ${param_idx}"));
            param_idx += 1;
        }
        if query.content_contains.is_some() {
            conditions.push(format!("s.content LIKE ${param_idx}"));
            param_idx += 1;
        }
        if query.meeting_id.is_some() {
            conditions.push(format!("s.meeting_id = ${param_idx}"));
            param_idx += 1;
        }
        if from_ts.is_some() {
            conditions.push(format!("s.timestamp >= ${param_idx}"));
            param_idx += 1;
        }
        if until_ts.is_some() {
            conditions.push(format!("s.timestamp < ${param_idx}"));
        }

        let where_clause = conditions.join(" AND ");
        let order_dir = match query.order {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        };

        let sql = format!(
            "SELECT s.id, s.user_id, u.name AS user_name, s.meeting_id, \
             COALESCE(m.title, '') AS meeting_title, s.timestamp, s.content \
             FROM speeches s \
             JOIN users u ON u.id = s.user_id \
             JOIN meetings m ON m.id = s.meeting_id \
             WHERE {where_clause} \
             ORDER BY s.timestamp {order_dir}"
        );

        let mut q = sqlx::query_as::<_, SpeechRecord>(&sql);

        if let Some(name) = &query.user_name_contains {
            q = q.bind(format!("%{name}%"));
        }
        if let Some(content) = &query.content_contains {
            q = q.bind(format!("%{content}%"));
        }
        if let Some(meeting_id) = query.meeting_id {
            q = q.bind(meeting_id);
        }
        if let Some(from_ts) = from_ts {
            q = q.bind(from_ts);
        }
        if let Some(until_ts) = until_ts {
            q = q.bind(until_ts);
        }

        let speeches = q.fetch_all(&self.pool).await?;
        Ok(speeches)
    }
}
