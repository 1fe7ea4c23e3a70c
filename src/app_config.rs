use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;
use crate::screenplay::classifier::{Vocabulary, DEFAULT_MAX_CHARACTER_LENGTH};

/// Application configuration module
/// This module handles loading, validating and saving the settings file.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Additions to the classifier vocabulary
    #[serde(default)]
    pub vocabulary: VocabularyConfig,

    /// Plain-text layout settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Vocabulary additions on top of the built-in phrase lists
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VocabularyConfig {
    // @field: Extra transition phrases, colon included
    #[serde(default)]
    pub extra_transitions: Vec<String>,

    // @field: Extra shot phrases
    #[serde(default)]
    pub extra_shots: Vec<String>,

    // @field: Extra cue extensions, without parentheses
    #[serde(default)]
    pub extra_character_extensions: Vec<String>,

    // @field: Cues must be shorter than this many characters
    #[serde(default = "default_max_character_length")]
    pub max_character_length: usize,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            extra_transitions: Vec::new(),
            extra_shots: Vec::new(),
            extra_character_extensions: Vec::new(),
            max_character_length: default_max_character_length(),
        }
    }
}

impl VocabularyConfig {
    /// Built-in vocabulary with the configured additions appended
    pub fn to_vocabulary(&self) -> Vocabulary {
        let mut vocabulary = Vocabulary::default();
        vocabulary.transitions.extend(self.extra_transitions.iter().cloned());
        vocabulary.shots.extend(self.extra_shots.iter().cloned());
        vocabulary
            .character_extensions
            .extend(self.extra_character_extensions.iter().cloned());
        vocabulary.max_character_length = self.max_character_length;
        vocabulary
    }
}

/// Plain-text page geometry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RenderConfig {
    // @field: Columns per page row
    #[serde(default = "default_page_width")]
    pub page_width: usize,

    // @field: Rows per page, used for page estimates
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_width: default_page_width(),
            lines_per_page: default_lines_per_page(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_max_character_length() -> usize {
    DEFAULT_MAX_CHARACTER_LENGTH
}

// Courier 10-pitch across a 6 inch text block
fn default_page_width() -> usize {
    60
}

fn default_lines_per_page() -> usize {
    55
}

// @const: Narrowest page that still fits the character cue column
const MIN_PAGE_WIDTH: usize = 40;

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vocabulary.max_character_length == 0 {
            return Err(ConfigError::Invalid(
                "vocabulary.max_character_length must be greater than zero".to_string(),
            ));
        }

        let mut extras = self
            .vocabulary
            .extra_transitions
            .iter()
            .chain(&self.vocabulary.extra_shots)
            .chain(&self.vocabulary.extra_character_extensions);
        if extras.any(|phrase| phrase.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "vocabulary phrases must not be blank".to_string(),
            ));
        }

        if self.render.page_width < MIN_PAGE_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "render.page_width must be at least {} (got {})",
                MIN_PAGE_WIDTH, self.render.page_width
            )));
        }

        if self.render.lines_per_page == 0 {
            return Err(ConfigError::Invalid(
                "render.lines_per_page must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the configuration file, writing a default one if it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let config: Config = serde_json::from_reader(BufReader::new(file))
                .map_err(ConfigError::from)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            debug!("Loaded configuration from {}", path.display());
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }
}
