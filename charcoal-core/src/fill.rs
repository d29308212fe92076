//! Flood fill.
//!
//! Breadth-first region fill over 4-connected neighbors (no
//! diagonals), bounded by cells matching the value under the starting
//! coordinate. Filling a region with the value it already has is a
//! no-op, so repeated fills are idempotent.

use std::collections::{HashSet, VecDeque};

use crate::canvas::Canvas;
use crate::cell::Cell;
use crate::error::Error;
use crate::history::History;
use crate::painter;

/// Fill the connected region under `(x, y)` with `new_cell`.
///
/// The region is every cell reachable from the start through
/// 4-connected steps over cells equal to the starting cell's value.
/// Each filled cell goes through `painter::paint`, so the whole fill
/// unwinds cell by cell under undo. O(area of the region).
pub fn flood_fill(
    canvas: &mut Canvas,
    history: &mut History,
    x: usize,
    y: usize,
    new_cell: Cell,
) -> Result<(), Error> {
    let target = canvas.get(x, y)?;
    if target == new_cell {
        // Nothing would change; avoid churning the history.
        return Ok(());
    }

    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    queue.push_back((x, y));
    visited.insert((x, y));

    while let Some((cx, cy)) = queue.pop_front() {
        painter::paint(canvas, history, cx, cy, new_cell)?;

        for (nx, ny) in neighbors(cx, cy) {
            if visited.contains(&(nx, ny)) {
                continue;
            }
            if matches!(canvas.get(nx, ny), Ok(cell) if cell == target) {
                visited.insert((nx, ny));
                queue.push_back((nx, ny));
            }
        }
    }

    log::debug!("flood fill from ({x}, {y}) painted {} cells", visited.len());
    Ok(())
}

/// The 4-connected neighbors of `(x, y)` that are representable.
/// Bounds checking is left to the canvas.
fn neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
    let left = x.checked_sub(1).map(|nx| (nx, y));
    let up = y.checked_sub(1).map(|ny| (x, ny));
    [Some((x + 1, y)), Some((x, y + 1)), left, up]
        .into_iter()
        .flatten()
}
