//! The interactive application.
//!
//! Owns the terminal session (raw mode, alternate screen, mouse
//! capture) and the event loop: translate one input event, hand it to
//! the editor, redraw, poll the auto-save timer. The loop ticks on a
//! poll timeout so auto-save fires without input, with the caveat that
//! a blocking prompt delays it until the prompt resolves.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use charcoal_core::{EditorState, Event};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
    KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

use crate::input::{self, Action};
use crate::render;

/// How long the input poll waits before the loop ticks anyway.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// The running application: editor state plus transient UI state.
pub struct App {
    editor: EditorState,
    /// Transient status-line message; cleared by the next event.
    message: Option<String>,
}

impl App {
    /// Size the canvas to the current terminal and build the session.
    pub fn new() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let (width, height) = input::canvas_size(cols, rows);
        log::debug!("terminal {cols}x{rows}, canvas {width}x{height}");
        Ok(App {
            editor: EditorState::new(width, height),
            message: None,
        })
    }

    /// Run the session to completion, restoring the terminal on the
    /// way out even when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        enter_terminal(&mut out)?;
        let result = self.event_loop(&mut out);
        let restored = leave_terminal(&mut out);
        result.and(restored)
    }

    fn event_loop(&mut self, out: &mut Stdout) -> io::Result<()> {
        while self.editor.is_running() {
            render::draw(out, &self.editor, self.message.as_deref())?;

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(out, key)?
                    }
                    TermEvent::Mouse(mouse) => {
                        if let Some(ev) = input::map_mouse(&mouse) {
                            self.dispatch(ev);
                        }
                    }
                    TermEvent::Resize(cols, rows) => {
                        let (width, height) = input::canvas_size(cols, rows);
                        self.dispatch(Event::Resize { width, height });
                    }
                    _ => {}
                }
            }

            match self.editor.maybe_auto_save(Instant::now()) {
                Ok(true) => self.message = Some("auto-saved".to_string()),
                Ok(false) => {}
                Err(err) => {
                    log::warn!("auto-save failed: {err}");
                    self.message = Some(err.to_string());
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, out: &mut Stdout, key: KeyEvent) -> io::Result<()> {
        match input::map_key(&key) {
            Some(Action::Editor(event)) => self.dispatch(event),
            Some(Action::Help) => self.show_help(out)?,
            Some(Action::PromptGlyph) => self.prompt_glyph(out)?,
            None => {}
        }
        Ok(())
    }

    /// Feed one event to the editor. Editor errors are recoverable by
    /// contract: show them on the status line and keep going.
    fn dispatch(&mut self, event: Event) {
        self.message = None;
        match self.editor.apply(event) {
            Ok(()) => {
                if event == Event::Save {
                    self.message = Some("saved".to_string());
                }
            }
            Err(err) => {
                log::warn!("event {event:?} failed: {err}");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Draw the help overlay and block until any key press.
    fn show_help(&mut self, out: &mut Stdout) -> io::Result<()> {
        render::draw_help(out, &self.editor)?;
        loop {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }

    /// Ask for one character on the status line and make it the active
    /// glyph. Escape cancels.
    fn prompt_glyph(&mut self, out: &mut Stdout) -> io::Result<()> {
        render::draw_prompt(out, &self.editor, "new glyph: ")?;
        loop {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char(c) => {
                        self.dispatch(Event::SelectGlyph(c));
                        return Ok(());
                    }
                    KeyCode::Esc => return Ok(()),
                    _ => {}
                }
            }
        }
    }
}

fn enter_terminal(out: &mut Stdout) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, Hide, EnableMouseCapture)
}

fn leave_terminal(out: &mut Stdout) -> io::Result<()> {
    let leave = execute!(out, DisableMouseCapture, Show, LeaveAlternateScreen);
    let raw = disable_raw_mode();
    out.flush()?;
    leave.and(raw)
}
