//! Canvas rendering.
//!
//! Pull-based: after each processed event the app asks for a full
//! redraw from the editor state. The grid overlay and the cursor are
//! display-only decorations; the canvas itself is never modified here.

use std::io::{self, Write};

use charcoal_core::{EditorState, PaletteColor};
use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

/// Marker shown at even/even intersections when the grid overlay is on.
const GRID_MARKER: char = '+';

/// Map a palette color onto a terminal color.
pub fn terminal_color(color: PaletteColor) -> Color {
    match color {
        PaletteColor::White => Color::White,
        PaletteColor::Red => Color::Red,
        PaletteColor::Green => Color::Green,
        PaletteColor::Blue => Color::Blue,
        PaletteColor::Yellow => Color::Yellow,
        PaletteColor::Cyan => Color::Cyan,
        PaletteColor::Magenta => Color::Magenta,
    }
}

/// Redraw the whole frame: canvas, cursor, and status line.
pub fn draw(out: &mut impl Write, editor: &EditorState, message: Option<&str>) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    let canvas = editor.canvas();
    for (y, row) in canvas.rows().enumerate() {
        queue!(out, MoveTo(0, y as u16))?;
        for (x, cell) in row.cells().iter().enumerate() {
            if editor.grid_enabled() && x % 2 == 0 && y % 2 == 0 {
                queue!(
                    out,
                    SetForegroundColor(Color::DarkGrey),
                    Print(GRID_MARKER),
                    ResetColor
                )?;
            } else {
                queue!(
                    out,
                    SetForegroundColor(terminal_color(cell.color)),
                    Print(cell.glyph),
                    ResetColor
                )?;
            }
        }
    }

    // The cursor cell shows the glyph about to be painted, inverted.
    let (cx, cy) = editor.cursor();
    if canvas.contains(cx, cy) {
        queue!(
            out,
            MoveTo(cx as u16, cy as u16),
            SetForegroundColor(terminal_color(editor.active_color())),
            SetAttribute(Attribute::Reverse),
            Print(editor.active_glyph()),
            SetAttribute(Attribute::NoReverse),
            ResetColor
        )?;
    }

    draw_status(out, editor, message)?;
    out.flush()
}

/// One-line status bar under the canvas.
fn draw_status(out: &mut impl Write, editor: &EditorState, message: Option<&str>) -> io::Result<()> {
    let mut status = format!(
        "[{}] {}  grid:{}  autosave:{}",
        editor.active_glyph(),
        editor.active_color().name(),
        on_off(editor.grid_enabled()),
        on_off(editor.auto_save_enabled()),
    );
    if editor.line_pending() {
        status.push_str("  line:pending");
    }
    if let Some(message) = message {
        status.push_str("  | ");
        status.push_str(message);
    }
    status.push_str("  (h: help)");

    // Clip to the terminal width; the status row is one wider than the
    // canvas because of the right margin.
    let clipped: String = status.chars().take(canvas_cols(editor) + 1).collect();
    queue!(
        out,
        MoveTo(0, editor.canvas().height() as u16),
        SetForegroundColor(Color::DarkGrey),
        Print(clipped),
        ResetColor
    )?;
    Ok(())
}

/// Centered help overlay. The caller blocks for a key press before the
/// next frame wipes it.
pub fn draw_help(out: &mut impl Write, editor: &EditorState) -> io::Result<()> {
    const LINES: [&str; 18] = [
        "charcoal commands:",
        "arrows: move cursor",
        "space: draw",
        "click: move cursor",
        "l: draw line (press twice)",
        "f: flood fill",
        "x: change glyph",
        "1-7: change color",
        "u: undo",
        "r: redo",
        "c: clear canvas",
        "z: toggle grid",
        "a: toggle auto-save",
        "s: save",
        "o: load",
        "q: quit",
        "h: this help",
        "press any key to return",
    ];

    let inner = LINES.iter().map(|l| l.len()).max().unwrap_or(0);
    let cols = canvas_cols(editor) + 1;
    let rows = editor.canvas().height() + 1;
    let left = cols.saturating_sub(inner + 2) / 2;
    let top = rows.saturating_sub(LINES.len() + 2) / 2;

    let horizontal = "-".repeat(inner + 2);
    queue!(
        out,
        MoveTo(left as u16, top as u16),
        Print(format!("+{horizontal}+"))
    )?;
    for (i, line) in LINES.iter().enumerate() {
        queue!(
            out,
            MoveTo(left as u16, (top + 1 + i) as u16),
            Print(format!("| {line:<inner$} |"))
        )?;
    }
    queue!(
        out,
        MoveTo(left as u16, (top + 1 + LINES.len()) as u16),
        Print(format!("+{horizontal}+"))
    )?;
    out.flush()
}

/// Prompt on the status line for the glyph picker.
pub fn draw_prompt(out: &mut impl Write, editor: &EditorState, prompt: &str) -> io::Result<()> {
    queue!(
        out,
        MoveTo(0, editor.canvas().height() as u16),
        Clear(ClearType::CurrentLine),
        Print(prompt)
    )?;
    out.flush()
}

fn canvas_cols(editor: &EditorState) -> usize {
    editor.canvas().width()
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
