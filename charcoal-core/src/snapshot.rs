//! Canvas snapshot persistence.
//!
//! The canvas is persisted as JSON: one array per row, one
//! `[glyph, colorIndex]` pair per cell, row-major, with the dimensions
//! implicit in the array lengths. Loading validates everything it
//! reads — glyphs must be one-character strings (enforced by `char`
//! deserialization), color indices must be 1-7, and all rows must have
//! the same width — and builds a fresh canvas, so a failed load leaves
//! the caller's canvas untouched.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::cell::Cell;
use crate::color::PaletteColor;
use crate::error::PersistenceError;

/// The single file the editor persists to.
pub const CANVAS_FILE: &str = "charcoal.json";

/// One persisted cell, serialized as a `[glyph, colorIndex]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord(pub char, pub u8);

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        CellRecord(cell.glyph, cell.color.index())
    }
}

/// Convert a canvas into its persisted row-major form.
pub fn to_records(canvas: &Canvas) -> Vec<Vec<CellRecord>> {
    canvas
        .rows()
        .map(|row| row.cells().iter().map(CellRecord::from).collect())
        .collect()
}

/// Rebuild a canvas from its persisted form, validating colors and
/// rectangularity.
pub fn from_records(records: Vec<Vec<CellRecord>>) -> Result<Canvas, PersistenceError> {
    let height = records.len();
    let width = records.first().map_or(0, Vec::len);

    let mut canvas = Canvas::new(width, height);
    for (y, row) in records.into_iter().enumerate() {
        if row.len() != width {
            return Err(PersistenceError::RaggedRows {
                row: y,
                len: row.len(),
                expected: width,
            });
        }
        for (x, CellRecord(glyph, index)) in row.into_iter().enumerate() {
            let color =
                PaletteColor::from_index(index).ok_or(PersistenceError::InvalidColor(index))?;
            // Coordinates come from the enumeration, so they are in bounds.
            let _ = canvas.set(x, y, Cell::new(glyph, color));
        }
    }
    Ok(canvas)
}

/// Serialize `canvas` to `path`, overwriting unconditionally.
pub fn save(canvas: &Canvas, path: &Path) -> Result<(), PersistenceError> {
    let json = serde_json::to_string(&to_records(canvas))?;
    fs::write(path, json)?;
    log::debug!(
        "saved {}x{} canvas to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}

/// Deserialize a canvas from `path`.
pub fn load(path: &Path) -> Result<Canvas, PersistenceError> {
    let json = fs::read_to_string(path)?;
    let records: Vec<Vec<CellRecord>> = serde_json::from_str(&json)?;
    let canvas = from_records(records)?;
    log::debug!(
        "loaded {}x{} canvas from {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(canvas)
}
