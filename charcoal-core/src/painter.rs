//! Single-cell paint operation.
//!
//! `paint` is the one sanctioned path for undoable edits: it records
//! the displaced cell into history, then writes through the canvas.
//! The flood fill and line tools funnel every cell they touch through
//! it, so a whole fill or line unwinds cell by cell under undo.

use crate::canvas::Canvas;
use crate::cell::Cell;
use crate::error::Error;
use crate::history::History;

/// Paint `cell` at `(x, y)`, recording the prior value for undo.
pub fn paint(
    canvas: &mut Canvas,
    history: &mut History,
    x: usize,
    y: usize,
    cell: Cell,
) -> Result<(), Error> {
    let prior = canvas.get(x, y)?;
    history.record(x, y, prior);
    canvas.set(x, y, cell)
}
