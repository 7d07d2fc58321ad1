//! Daily aggregation tests.

#[cfg(test)]
mod daily_tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use crate::analysis::DailyAggregator;
    use crate::tests::support::speech_at;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(DailyAggregator::summarize(&[]).is_empty());
    }

    #[test]
    fn test_groups_by_calendar_date() {
        let speeches = vec![
            speech_at("2024-05-13T09:00:00Z", "田中", "進捗 報告"),
            speech_at("2024-05-13T15:30:00Z", "佐藤", "課題 共有"),
            speech_at("2024-05-14T10:00:00Z", "田中", "決定 事項"),
        ];

        let summaries = DailyAggregator::summarize(&speeches);
        assert_eq!(summaries.len(), 2);

        let first = &summaries[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 5, 13).unwrap());
        assert_eq!(first.total_speeches, 2);
        assert_eq!(first.speeches_by_user.get("田中"), 1);
        assert_eq!(first.speeches_by_user.get("佐藤"), 1);

        let second = &summaries[1];
        assert_eq!(second.date, NaiveDate::from_ymd_opt(2024, 5, 14).unwrap());
        assert_eq!(second.total_speeches, 1);
    }

    #[test]
    fn test_meetings_are_a_first_seen_set() {
        let mut a = speech_at("2024-05-13T09:00:00Z", "田中", "");
        a.meeting_title = "朝会".to_string();
        a.meeting_id = Uuid::new_v4();
        let mut b = speech_at("2024-05-13T11:00:00Z", "佐藤", "");
        b.meeting_title = "設計レビュー".to_string();
        b.meeting_id = Uuid::new_v4();
        let mut c = speech_at("2024-05-13T12:00:00Z", "田中", "");
        c.meeting_title = "朝会".to_string();
        c.meeting_id = a.meeting_id;

        let summaries = DailyAggregator::summarize(&[a, b, c]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].unique_meetings_count, 2);
        assert_eq!(summaries[0].meetings, ["朝会", "設計レビュー"]);
    }

    #[test]
    fn test_untitled_meeting_kept_as_empty_string() {
        let mut a = speech_at("2024-05-13T09:00:00Z", "田中", "");
        a.meeting_title = String::new();

        let summaries = DailyAggregator::summarize(&[a]);
        // The placeholder for untitled meetings belongs to the renderer
        assert_eq!(summaries[0].meetings, [""]);
        assert_eq!(summaries[0].unique_meetings_count, 1);
    }

    #[test]
    fn test_keywords_counted_per_occurrence() {
        let speeches = vec![
            speech_at("2024-05-13T09:00:00Z", "田中", "進捗 進捗 報告"),
            speech_at("2024-05-13T10:00:00Z", "佐藤", "進捗 確認"),
        ];

        let summaries = DailyAggregator::summarize(&speeches);
        let keywords = &summaries[0].top_keywords;
        // Occurrence counting, unlike the presence-based topic extractor
        assert_eq!(keywords[0].word, "進捗");
        assert_eq!(keywords[0].count, 3);
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_keyword_ties_keep_first_seen_order() {
        let speeches = vec![speech_at("2024-05-13T09:00:00Z", "田中", "基盤 改修 手順")];

        let summaries = DailyAggregator::summarize(&speeches);
        let words: Vec<&str> = summaries[0]
            .top_keywords
            .iter()
            .map(|k| k.word.as_str())
            .collect();
        assert_eq!(words, ["基盤", "改修", "手順"]);
    }

    #[test]
    fn test_short_tokens_are_filtered() {
        let speeches = vec![speech_at("2024-05-13T09:00:00Z", "田中", "a 進捗 b の 確認")];

        let summaries = DailyAggregator::summarize(&speeches);
        let words: Vec<&str> = summaries[0]
            .top_keywords
            .iter()
            .map(|k| k.word.as_str())
            .collect();
        // Tokens under two characters never make the ranking
        assert_eq!(words, ["進捗", "確認"]);
    }

    #[test]
    fn test_top_keywords_truncated_to_ten() {
        let content = (0..15)
            .map(|i| format!("word{i:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        let speeches = vec![speech_at("2024-05-13T09:00:00Z", "田中", &content)];

        let summaries = DailyAggregator::summarize(&speeches);
        assert_eq!(summaries[0].top_keywords.len(), 10);
    }

    #[test]
    fn test_empty_content_contributes_no_keywords() {
        let speeches = vec![speech_at("2024-05-13T09:00:00Z", "田中", "")];

        let summaries = DailyAggregator::summarize(&speeches);
        assert_eq!(summaries[0].total_speeches, 1);
        assert!(summaries[0].top_keywords.is_empty());
    }

    #[test]
    fn test_summary_serializes_with_contract_field_names() {
        let speeches = vec![speech_at("2024-05-13T09:00:00Z", "田中", "進捗 報告")];

        let summaries = DailyAggregator::summarize(&speeches);
        let json = serde_json::to_value(&summaries[0]).unwrap();
        assert!(json.get("totalSpeeches").is_some());
        assert!(json.get("uniqueMeetingsCount").is_some());
        assert!(json.get("speechesByUser").is_some());
        assert!(json.get("topKeywords").is_some());
        assert_eq!(json["topKeywords"][0]["word"], "進捗");
        assert_eq!(json["topKeywords"][0]["count"], 1);
    }
}
