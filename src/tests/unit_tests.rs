//! Pure unit tests (no database required)
//!
//! These tests verify configuration, lexicon and error plumbing without
//! external dependencies.

#[cfg(test)]
mod unit_tests {
    use crate::config::AppConfig;
    use crate::lexicon::Lexicon;
    use crate::SpeechLensError;

    // ====== Lexicon Tests ======

    #[test]
    fn test_default_lexicon_lists() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.positive.len(), 7);
        assert_eq!(lexicon.negative.len(), 7);
        assert_eq!(lexicon.neutral.len(), 7);
        assert_eq!(lexicon.topics.len(), 4);
    }

    #[test]
    fn test_default_lexicon_category_order() {
        let lexicon = Lexicon::default();
        let names: Vec<&str> = lexicon.topics.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            ["技術的", "プロジェクト管理", "コミュニケーション", "意思決定"]
        );
    }

    #[test]
    fn test_normalizer_is_larger_list_length() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.normalizer(), 7);

        let mut asymmetric = Lexicon::default();
        asymmetric.negative.push("最悪".to_string());
        assert_eq!(asymmetric.normalizer(), 8);
    }

    #[test]
    fn test_lexicon_parses_from_toml() {
        let lexicon: Lexicon = toml::from_str(
            r#"
            positive = ["良い"]
            negative = ["悪い"]

            [[topics]]
            name = "技術的"
            keywords = ["バグ"]
            "#,
        )
        .unwrap();
        assert_eq!(lexicon.positive, ["良い"]);
        assert!(lexicon.neutral.is_empty());
        assert_eq!(lexicon.topics[0].keywords, ["バグ"]);
    }

    // ====== Config Tests ======

    #[test]
    fn test_config_parses_with_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [database]
            url = "postgresql://localhost/speechlens"
            max_connections = 5
            min_connections = 1
            connection_timeout = 10

            [logging]
            level = "info"
            backtrace = false
            "#,
        )
        .unwrap();

        assert_eq!(config.database_url(), "postgresql://localhost/speechlens");
        assert_eq!(config.max_connections(), 5);
        // Server and lexicon sections fall back to defaults
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.enable_cors);
        assert!(config.lexicon.path.is_none());
    }

    #[test]
    fn test_config_without_lexicon_path_uses_builtin() {
        let config: AppConfig = toml::from_str(
            r#"
            [database]
            url = "postgresql://localhost/speechlens"
            max_connections = 5
            min_connections = 1
            connection_timeout = 10

            [logging]
            level = "debug"
            backtrace = true
            "#,
        )
        .unwrap();

        let lexicon = config.load_lexicon().unwrap();
        assert_eq!(lexicon.normalizer(), 7);
    }

    // ====== Error Handling Tests ======

    #[test]
    fn test_validation_error_display() {
        let error = SpeechLensError::validation("month must be between 1 and 12, got 13");
        let display = format!("{error}");
        assert!(display.starts_with("Validation error:"));
        assert!(display.contains("month"));
    }

    #[test]
    fn test_custom_error() {
        let error = SpeechLensError::Custom("Test error".to_string());
        let display = format!("{error}");
        // Custom errors include "Custom error: " prefix
        assert!(display.contains("Test error"));
    }

    #[test]
    fn test_error_from_io() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: SpeechLensError = io_err.into();

        assert!(matches!(err, SpeechLensError::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SpeechLensError = json_err.into();

        assert!(matches!(err, SpeechLensError::Serialization(_)));
    }
}
