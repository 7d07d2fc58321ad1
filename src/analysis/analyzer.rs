//! Keyword classifier for a single utterance.
//!
//! Deliberately simple: fixed-lexicon substring matching, no tokenization,
//! no language model. Each keyword counts at most once per utterance no
//! matter how often it repeats (presence, not occurrence).

use std::cmp::Ordering;

use crate::lexicon::Lexicon;
use crate::models::AnnotatedSpeech;
use crate::models::EmotionScore;
use crate::models::Sentiment;
use crate::models::SpeechAnalysis;
use crate::models::SpeechRecord;
use crate::models::TopicMatch;

/// Pure function of (text, lexicon); safe to share across requests.
#[derive(Debug, Clone, Copy)]
pub struct TextAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> TextAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score the emotional tone of `text`.
    ///
    /// Each positive word present adds 1, each negative word present
    /// subtracts 1; the neutral list contributes nothing. The raw sum is
    /// normalized by the larger sentiment list length, so the score lands in
    /// [-1, 1] by construction.
    pub fn analyze_emotion(&self, text: &str) -> EmotionScore {
        let mut raw: i64 = 0;
        for word in &self.lexicon.positive {
            if text.contains(word.as_str()) {
                raw += 1;
            }
        }
        for word in &self.lexicon.negative {
            if text.contains(word.as_str()) {
                raw -= 1;
            }
        }

        let sentiment = match raw.cmp(&0) {
            Ordering::Greater => Sentiment::Positive,
            Ordering::Less => Sentiment::Negative,
            Ordering::Equal => Sentiment::Neutral,
        };
        let normalizer = self.lexicon.normalizer().max(1);

        EmotionScore {
            score: raw as f64 / normalizer as f64,
            sentiment,
        }
    }

    /// Count keyword presence per topic category.
    ///
    /// Categories with no matching keyword are left out of the result; the
    /// matched ones keep the lexicon's category order.
    pub fn extract_topics(&self, text: &str) -> TopicMatch {
        let mut topics = TopicMatch::new();
        for category in &self.lexicon.topics {
            let matches = category
                .keywords
                .iter()
                .filter(|keyword| text.contains(keyword.as_str()))
                .count();
            if matches > 0 {
                topics.add(category.name.clone(), matches as u64);
            }
        }
        topics
    }

    /// Attach classifier output to a record
    pub fn annotate(&self, speech: SpeechRecord) -> AnnotatedSpeech {
        let analysis = SpeechAnalysis {
            emotion: self.analyze_emotion(&speech.content),
            topics: self.extract_topics(&speech.content),
        };
        AnnotatedSpeech { speech, analysis }
    }
}
