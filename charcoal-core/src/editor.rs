//! Editor state machine.
//!
//! `EditorState` owns the canvas and history for one session and
//! consumes abstract input events one at a time. It is a plain value
//! with no ambient state, so several independent sessions can coexist
//! and tests drive it deterministically.
//!
//! The only mode is the pending line: after one `LinePoint` the editor
//! remembers the start coordinate until the second `LinePoint` draws
//! the line. Every other event behaves identically in both modes.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::canvas::Canvas;
use crate::cell::Cell;
use crate::color::PaletteColor;
use crate::error::Error;
use crate::history::History;
use crate::snapshot;
use crate::{fill, line, painter};

/// How long auto-save waits between saves.
pub const AUTO_SAVE_INTERVAL: Duration = Duration::from_secs(5);

/// A cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// An abstract input event.
///
/// Keyboard, mouse, and terminal-resize input all funnel into this one
/// type; the frontend translates device events, the editor interprets
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Move the cursor one step, clamped to the canvas.
    Move(Direction),
    /// Jump the cursor to an absolute position (mouse click).
    /// Out-of-bounds positions are ignored.
    MoveTo { x: usize, y: usize },
    /// Paint the active glyph/color at the cursor.
    Paint,
    /// First press marks the line start; second press draws the line
    /// from the mark to the cursor.
    LinePoint,
    /// Flood-fill from the cursor with the active glyph/color.
    Fill,
    Undo,
    Redo,
    /// Blank the whole canvas. History is untouched.
    Clear,
    /// The drawable area changed (terminal resize, minus the margin).
    Resize { width: usize, height: usize },
    SelectColor(PaletteColor),
    SelectGlyph(char),
    ToggleGrid,
    ToggleAutoSave,
    /// Write the canvas to the session's save file.
    Save,
    /// Replace the canvas from the session's save file. On failure the
    /// canvas is untouched and the error is surfaced, non-fatally.
    Load,
    Quit,
}

/// One editing session: canvas, history, cursor, and tool state.
#[derive(Debug)]
pub struct EditorState {
    canvas: Canvas,
    history: History,
    cursor_x: usize,
    cursor_y: usize,
    active_glyph: char,
    active_color: PaletteColor,
    grid_enabled: bool,
    auto_save_enabled: bool,
    /// Start of a pending line; `Some` exactly while a line is pending.
    line_start: Option<(usize, usize)>,
    running: bool,
    save_path: PathBuf,
    last_save: Instant,
}

impl EditorState {
    /// Create a session with a blank canvas, saving to the default
    /// file in the working directory.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_save_path(width, height, PathBuf::from(snapshot::CANVAS_FILE))
    }

    /// Create a session that saves to `save_path`.
    pub fn with_save_path(width: usize, height: usize, save_path: PathBuf) -> Self {
        EditorState {
            canvas: Canvas::new(width, height),
            history: History::new(),
            cursor_x: 0,
            cursor_y: 0,
            active_glyph: '#',
            active_color: PaletteColor::White,
            grid_enabled: false,
            auto_save_enabled: false,
            line_start: None,
            running: true,
            save_path,
            last_save: Instant::now(),
        }
    }

    /// Process one input event. Errors are recoverable: the session
    /// stays consistent and keeps running.
    pub fn apply(&mut self, event: Event) -> Result<(), Error> {
        match event {
            Event::Move(direction) => self.move_cursor(direction),
            Event::MoveTo { x, y } => {
                if self.canvas.contains(x, y) {
                    self.cursor_x = x;
                    self.cursor_y = y;
                }
            }
            Event::Paint => {
                if !self.canvas.is_empty() {
                    let cell = self.active_cell();
                    painter::paint(
                        &mut self.canvas,
                        &mut self.history,
                        self.cursor_x,
                        self.cursor_y,
                        cell,
                    )?;
                }
            }
            Event::LinePoint => self.line_point()?,
            Event::Fill => {
                // Switching tools abandons a pending line.
                self.line_start = None;
                if !self.canvas.is_empty() {
                    let cell = self.active_cell();
                    fill::flood_fill(
                        &mut self.canvas,
                        &mut self.history,
                        self.cursor_x,
                        self.cursor_y,
                        cell,
                    )?;
                }
            }
            Event::Undo => {
                self.history.undo(&mut self.canvas);
            }
            Event::Redo => {
                self.history.redo(&mut self.canvas);
            }
            Event::Clear => self.canvas.clear(),
            Event::Resize { width, height } => self.resize(width, height),
            Event::SelectColor(color) => self.active_color = color,
            Event::SelectGlyph(glyph) => self.active_glyph = glyph,
            Event::ToggleGrid => self.grid_enabled = !self.grid_enabled,
            Event::ToggleAutoSave => self.auto_save_enabled = !self.auto_save_enabled,
            Event::Save => self.save()?,
            Event::Load => self.load()?,
            Event::Quit => self.running = false,
        }
        Ok(())
    }

    /// Poll the auto-save timer. Saves when auto-save is enabled and
    /// the interval has elapsed since the last save; returns whether a
    /// save happened. Takes `now` explicitly so the policy is testable
    /// without a wall clock.
    pub fn maybe_auto_save(&mut self, now: Instant) -> Result<bool, Error> {
        if !self.auto_save_enabled {
            return Ok(false);
        }
        if now.saturating_duration_since(self.last_save) < AUTO_SAVE_INTERVAL {
            return Ok(false);
        }
        snapshot::save(&self.canvas, &self.save_path)?;
        self.last_save = now;
        Ok(true)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_x, self.cursor_y)
    }

    pub fn active_glyph(&self) -> char {
        self.active_glyph
    }

    pub fn active_color(&self) -> PaletteColor {
        self.active_color
    }

    pub fn grid_enabled(&self) -> bool {
        self.grid_enabled
    }

    pub fn auto_save_enabled(&self) -> bool {
        self.auto_save_enabled
    }

    /// Whether the next `LinePoint` completes a line.
    pub fn line_pending(&self) -> bool {
        self.line_start.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The cell the active glyph and color would paint.
    fn active_cell(&self) -> Cell {
        Cell::new(self.active_glyph, self.active_color)
    }

    fn move_cursor(&mut self, direction: Direction) {
        let max_x = self.canvas.width().saturating_sub(1);
        let max_y = self.canvas.height().saturating_sub(1);
        match direction {
            Direction::Up => self.cursor_y = self.cursor_y.saturating_sub(1),
            Direction::Down => self.cursor_y = (self.cursor_y + 1).min(max_y),
            Direction::Left => self.cursor_x = self.cursor_x.saturating_sub(1),
            Direction::Right => self.cursor_x = (self.cursor_x + 1).min(max_x),
        }
    }

    fn line_point(&mut self) -> Result<(), Error> {
        if self.canvas.is_empty() {
            return Ok(());
        }
        match self.line_start.take() {
            None => {
                self.line_start = Some((self.cursor_x, self.cursor_y));
                log::debug!("line started at ({}, {})", self.cursor_x, self.cursor_y);
            }
            Some((x0, y0)) => {
                let cell = self.active_cell();
                line::draw_line(
                    &mut self.canvas,
                    &mut self.history,
                    x0,
                    y0,
                    self.cursor_x,
                    self.cursor_y,
                    cell,
                )?;
            }
        }
        Ok(())
    }

    /// Apply new drawable dimensions: resize the canvas preserving the
    /// overlap, clamp the cursor back into bounds, and prune history
    /// records the new bounds orphaned. A pending line whose start fell
    /// outside is abandoned.
    fn resize(&mut self, width: usize, height: usize) {
        self.canvas.resize(width, height);
        self.clamp_cursor();
        self.history.retain_in_bounds(width, height);
        if let Some((x0, y0)) = self.line_start {
            if !self.canvas.contains(x0, y0) {
                self.line_start = None;
            }
        }
        log::debug!("canvas resized to {width}x{height}");
    }

    fn save(&mut self) -> Result<(), Error> {
        snapshot::save(&self.canvas, &self.save_path)?;
        Ok(())
    }

    /// Replace the canvas from the save file. The current canvas is
    /// swapped out only after a fully validated load.
    fn load(&mut self) -> Result<(), Error> {
        let loaded = snapshot::load(&self.save_path)?;
        self.canvas = loaded;
        self.clamp_cursor();
        self.history
            .retain_in_bounds(self.canvas.width(), self.canvas.height());
        if let Some((x0, y0)) = self.line_start {
            if !self.canvas.contains(x0, y0) {
                self.line_start = None;
            }
        }
        Ok(())
    }

    fn clamp_cursor(&mut self) {
        self.cursor_x = self.cursor_x.min(self.canvas.width().saturating_sub(1));
        self.cursor_y = self.cursor_y.min(self.canvas.height().saturating_sub(1));
    }
}
