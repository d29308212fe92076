//! Error types for the editor core.

use std::io;

use thiserror::Error;

/// Errors surfaced by core editor operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A coordinate fell outside the current canvas dimensions.
    ///
    /// The cursor is always clamped, so in normal interactive use this
    /// only signals misuse of the API (callers constructing their own
    /// coordinates), never user input.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Saving or loading the canvas file failed. Always recoverable:
    /// the in-memory canvas is left untouched.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Failures while saving or loading a canvas snapshot.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid JSON, or a cell is not a `[glyph, color]`
    /// pair with a one-character glyph.
    #[error("malformed canvas file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("color index {0} is outside the palette (valid indices are 1-7)")]
    InvalidColor(u8),
}
