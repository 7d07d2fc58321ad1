//! Fixed keyword configuration shared by the classifier.
//!
//! The lexicon is loaded once at process start and treated as read-only;
//! concurrent requests share one instance and never mutate it.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

/// One labeled topic category and the keywords that tag it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Sentiment and topic keyword lists.
///
/// The neutral list is kept for documentation and readability; it never
/// contributes to the emotion score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    #[serde(default)]
    pub neutral: Vec<String>,
    pub topics: Vec<TopicCategory>,
}

impl Lexicon {
    /// Load a lexicon from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let lexicon: Lexicon = toml::from_str(&content)?;
        Ok(lexicon)
    }

    /// Denominator used to normalize raw emotion scores into [-1, 1].
    ///
    /// Fixed by the word lists, never recomputed from analyzed text.
    pub fn normalizer(&self) -> usize {
        self.positive.len().max(self.negative.len())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        fn words(list: &[&str]) -> Vec<String> {
            list.iter().map(|w| (*w).to_string()).collect()
        }

        Self {
            positive: words(&[
                "ありがとう",
                "素晴らしい",
                "良い",
                "賛成",
                "進展",
                "成功",
                "改善",
            ]),
            negative: words(&[
                "問題",
                "課題",
                "難しい",
                "失敗",
                "遅延",
                "懸念",
                "不具合",
            ]),
            neutral: words(&["検討", "確認", "報告", "実施", "予定", "開始", "終了"]),
            topics: vec![
                TopicCategory {
                    name: "技術的".to_string(),
                    keywords: words(&["開発", "バグ", "コード", "テスト", "デプロイ", "実装"]),
                },
                TopicCategory {
                    name: "プロジェクト管理".to_string(),
                    keywords: words(&["スケジュール", "進捗", "タスク", "期限", "コスト"]),
                },
                TopicCategory {
                    name: "コミュニケーション".to_string(),
                    keywords: words(&["報告", "連絡", "相談", "フィードバック", "共有"]),
                },
                TopicCategory {
                    name: "意思決定".to_string(),
                    keywords: words(&["決定", "承認", "判断", "選択", "方針"]),
                },
            ],
        }
    }
}
