//! Charcoal Editor Core
//!
//! This crate provides the platform-independent core of the charcoal
//! drawing editor:
//! - Canvas model: a bounds-checked 2D grid of (glyph, color) cells
//! - Undo/redo history of single-cell edits
//! - Drawing tools: painter, flood fill, Bresenham line
//! - Editor state machine consuming abstract input events
//! - JSON snapshot persistence to a single file
//!
//! This crate has NO terminal dependencies and can be driven headlessly
//! for deterministic testing; the interactive frontend lives in
//! `charcoal-term`.

pub mod canvas;
pub mod cell;
pub mod color;
pub mod editor;
pub mod error;
pub mod fill;
pub mod history;
pub mod line;
pub mod painter;
pub mod row;
pub mod snapshot;

pub use canvas::Canvas;
pub use cell::Cell;
pub use color::PaletteColor;
pub use editor::{Direction, EditorState, Event, AUTO_SAVE_INTERVAL};
pub use error::{Error, PersistenceError};
pub use history::{EditRecord, History};
pub use row::Row;
