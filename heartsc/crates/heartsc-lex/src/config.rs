//! Lexer configuration.
//!
//! [`LexerConfig`] can be built in code or loaded from TOML. Every field has a
//! default, so an empty document is a valid configuration:
//!
//! ```toml
//! unknown_chars = "fatal"
//! nested_block_comments = true
//! max_comment_depth = 16
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default limit on nested block comment depth.
pub const DEFAULT_MAX_COMMENT_DEPTH: u32 = 64;

/// What the lexer does with a character outside the lexical grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCharPolicy {
    /// Emit an `Unknown` token holding the character and a warning diagnostic.
    #[default]
    PassThrough,
    /// Stop with [`LexError::UnexpectedCharacter`](crate::LexError::UnexpectedCharacter).
    Fatal,
}

/// Configuration for a [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Handling of characters outside the lexical grammar.
    #[serde(default)]
    pub unknown_chars: UnknownCharPolicy,

    /// Whether `/*` inside a block comment opens a nested comment.
    #[serde(default)]
    pub nested_block_comments: bool,

    /// Deepest nesting accepted when `nested_block_comments` is on.
    #[serde(default = "default_max_comment_depth")]
    pub max_comment_depth: u32,

    /// Whether non-ASCII letters and digits may appear in identifiers.
    #[serde(default)]
    pub unicode_identifiers: bool,

    /// Whether a leading UTF-8 byte-order mark is skipped.
    #[serde(default = "default_true")]
    pub skip_bom: bool,
}

fn default_max_comment_depth() -> u32 {
    DEFAULT_MAX_COMMENT_DEPTH
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            unknown_chars: UnknownCharPolicy::default(),
            nested_block_comments: false,
            max_comment_depth: default_max_comment_depth(),
            unicode_identifiers: false,
            skip_bom: true,
        }
    }
}

/// Errors raised while loading a [`LexerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read lexer configuration {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML or has fields of the wrong type.
    #[error("failed to parse lexer configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("failed to serialize lexer configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The values parse but are not usable.
    #[error("invalid lexer configuration: {0}")]
    Invalid(String),
}

impl LexerConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use heartsc_lex::{LexerConfig, UnknownCharPolicy};
    ///
    /// let config = LexerConfig::from_toml_str("unknown_chars = \"fatal\"").unwrap();
    /// assert_eq!(config.unknown_chars, UnknownCharPolicy::Fatal);
    /// assert!(config.skip_bom);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: LexerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks values that parse but cannot be honored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_comment_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_comment_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
