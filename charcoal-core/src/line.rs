//! Line drawing.
//!
//! Integer Bresenham rasterization between two canvas coordinates.
//! Works in all octants without floating point; both endpoints are
//! always painted, and a degenerate zero-length line paints exactly
//! one cell.

use crate::canvas::Canvas;
use crate::cell::Cell;
use crate::error::Error;
use crate::history::History;
use crate::painter;

/// Draw a straight line of `cell` from `(x0, y0)` to `(x1, y1)`.
///
/// Every stepped-through coordinate, endpoints included, is written
/// via `painter::paint`. The walk stays inside the bounding box of the
/// endpoints, so in-bounds endpoints guarantee an in-bounds line.
pub fn draw_line(
    canvas: &mut Canvas,
    history: &mut History,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    cell: Cell,
) -> Result<(), Error> {
    let (mut x, mut y) = (x0 as i64, y0 as i64);
    let (tx, ty) = (x1 as i64, y1 as i64);

    let dx = (tx - x).abs();
    let dy = -(ty - y).abs();
    let sx = if x < tx { 1 } else { -1 };
    let sy = if y < ty { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        painter::paint(canvas, history, x as usize, y as usize, cell)?;
        if x == tx && y == ty {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    Ok(())
}
