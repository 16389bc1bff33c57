//! Error types for glyph table loading.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading a glyph table.
#[derive(Error, Debug)]
pub enum GlyphError {
    /// The table file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The table is not valid JSON or does not match the table format.
    #[error("Invalid glyph table: {0}")]
    Json(#[from] serde_json::Error),

    /// A table key is not exactly one character.
    #[error("Glyph key {0:?} must be a single character")]
    InvalidKey(String),

    /// A glyph entry has unusable geometry.
    #[error("Invalid glyph {ch:?}: {reason}")]
    InvalidGlyph { ch: char, reason: String },
}

/// Result type alias for glyph table operations.
pub type GlyphResult<T> = Result<T, GlyphError>;
