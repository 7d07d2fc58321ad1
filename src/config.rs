use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::lexicon::Lexicon;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_enable_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

/// Optional override for the built-in classifier lexicon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Path to a TOML lexicon file; the built-in word lists are used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            eprintln!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            Err(crate::SpeechLensError::Config(
                "No configuration file found. Expected config.toml or config.example.toml"
                    .to_string(),
            ))
        }
    }

    /// Resolve the classifier lexicon: configured file if set, built-in default otherwise
    pub fn load_lexicon(&self) -> crate::Result<Lexicon> {
        match &self.lexicon.path {
            Some(path) => Lexicon::from_file(path),
            None => Ok(Lexicon::default()),
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    pub fn max_connections(&self) -> u32 {
        self.database.max_connections
    }

    pub fn min_connections(&self) -> u32 {
        self.database.min_connections
    }

    pub fn connection_timeout(&self) -> u64 {
        self.database.connection_timeout
    }
}
