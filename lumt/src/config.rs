//! Configuration module for the lumt CLI.
//!
//! Settings live in `lumt.toml`. Every field has a default, so a partial
//! file (or none at all) is fine.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use lumc_lex::config::{DEFAULT_MIN_TYPO_LENGTH, DEFAULT_SIMILARITY_CUTOFF};
use lumc_lex::LexerConfig;

use crate::error::{LumtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lumt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Lexer tuning.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Output defaults for `lex` and `export`.
    #[serde(default)]
    pub output: OutputSection,
}

/// `[lexer]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerSection {
    /// Similarity a word must exceed to be reported as a keyword typo.
    #[serde(default = "default_similarity_cutoff")]
    pub similarity_cutoff: f64,

    /// Words shorter than this many characters skip the typo check.
    #[serde(default = "default_min_typo_length")]
    pub min_typo_length: usize,
}

/// `[output]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputSection {
    /// Default format name: table, text, csv or json.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_similarity_cutoff() -> f64 {
    DEFAULT_SIMILARITY_CUTOFF
}

fn default_min_typo_length() -> usize {
    DEFAULT_MIN_TYPO_LENGTH
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            similarity_cutoff: default_similarity_cutoff(),
            min_typo_length: default_min_typo_length(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/lumt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LumtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| LumtError::Config(format!("Failed to parse configuration: {}", e)))?;

        // out-of-range lexer values fail the load
        config.lexer_config()?;
        Ok(config)
    }

    /// The validated lexer configuration.
    pub fn lexer_config(&self) -> Result<LexerConfig> {
        Ok(LexerConfig::new(
            self.lexer.similarity_cutoff,
            self.lexer.min_typo_length,
        )?)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lumt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lumt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
