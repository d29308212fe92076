//! Input translation.
//!
//! Maps crossterm key, mouse, and resize events onto the editor's
//! abstract event type. Two keys need frontend interaction before they
//! produce an editor event (the help overlay and the glyph prompt), so
//! the mapping returns an `Action` that the app interprets.

use charcoal_core::{Direction, Event, PaletteColor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward an event to the editor.
    Editor(Event),
    /// Show the help overlay.
    Help,
    /// Read one character and make it the active glyph.
    PromptGlyph,
}

/// Translate a key press. Unbound keys map to nothing.
pub fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // Only Ctrl+C is bound; everything else with modifiers is
        // left alone.
        return match key.code {
            KeyCode::Char('c') => Some(Action::Editor(Event::Quit)),
            _ => None,
        };
    }

    let event = match key.code {
        KeyCode::Up => Event::Move(Direction::Up),
        KeyCode::Down => Event::Move(Direction::Down),
        KeyCode::Left => Event::Move(Direction::Left),
        KeyCode::Right => Event::Move(Direction::Right),
        KeyCode::Char(' ') => Event::Paint,
        KeyCode::Char('c') => Event::Clear,
        KeyCode::Char('s') => Event::Save,
        KeyCode::Char('o') => Event::Load,
        KeyCode::Char('q') => Event::Quit,
        KeyCode::Char('u') => Event::Undo,
        KeyCode::Char('r') => Event::Redo,
        KeyCode::Char('z') => Event::ToggleGrid,
        KeyCode::Char('a') => Event::ToggleAutoSave,
        KeyCode::Char('f') => Event::Fill,
        KeyCode::Char('l') => Event::LinePoint,
        KeyCode::Char('x') => return Some(Action::PromptGlyph),
        KeyCode::Char('h') => return Some(Action::Help),
        KeyCode::Char(c @ '1'..='7') => {
            let color = PaletteColor::from_index(c as u8 - b'0')?;
            Event::SelectColor(color)
        }
        _ => return None,
    };
    Some(Action::Editor(event))
}

/// Translate a mouse event: a left click jumps the cursor. The editor
/// ignores out-of-bounds targets, so clicks on the status line or the
/// margin do nothing.
pub fn map_mouse(mouse: &MouseEvent) -> Option<Event> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Event::MoveTo {
            x: mouse.column as usize,
            y: mouse.row as usize,
        }),
        _ => None,
    }
}

/// Drawable canvas dimensions for a terminal of `cols` x `rows`: one
/// column of margin and one row reserved for the status line.
pub fn canvas_size(cols: u16, rows: u16) -> (usize, usize) {
    (
        (cols as usize).saturating_sub(1),
        (rows as usize).saturating_sub(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_move() {
        assert_eq!(
            map_key(&press(KeyCode::Up)),
            Some(Action::Editor(Event::Move(Direction::Up)))
        );
        assert_eq!(
            map_key(&press(KeyCode::Right)),
            Some(Action::Editor(Event::Move(Direction::Right)))
        );
    }

    #[test]
    fn test_digits_select_colors() {
        assert_eq!(
            map_key(&press(KeyCode::Char('1'))),
            Some(Action::Editor(Event::SelectColor(PaletteColor::White)))
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('7'))),
            Some(Action::Editor(Event::SelectColor(PaletteColor::Magenta)))
        );
        assert_eq!(map_key(&press(KeyCode::Char('8'))), None);
        assert_eq!(map_key(&press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_tool_keys() {
        assert_eq!(
            map_key(&press(KeyCode::Char(' '))),
            Some(Action::Editor(Event::Paint))
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('f'))),
            Some(Action::Editor(Event::Fill))
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('l'))),
            Some(Action::Editor(Event::LinePoint))
        );
        assert_eq!(map_key(&press(KeyCode::Char('x'))), Some(Action::PromptGlyph));
        assert_eq!(map_key(&press(KeyCode::Char('h'))), Some(Action::Help));
        assert_eq!(map_key(&press(KeyCode::Esc)), None);
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_clears() {
        assert_eq!(
            map_key(&press(KeyCode::Char('c'))),
            Some(Action::Editor(Event::Clear))
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), Some(Action::Editor(Event::Quit)));
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_s), None);
    }

    #[test]
    fn test_left_click_jumps_cursor() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_mouse(&click), Some(Event::MoveTo { x: 7, y: 3 }));

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..click
        };
        assert_eq!(map_mouse(&release), None);
    }

    #[test]
    fn test_canvas_size_reserves_margin_and_status_line() {
        assert_eq!(canvas_size(80, 24), (79, 23));
        assert_eq!(canvas_size(1, 1), (0, 0));
        assert_eq!(canvas_size(0, 0), (0, 0));
    }

    #[test]
    fn test_key_event_kind_is_not_consulted_here() {
        // Filtering repeats/releases happens in the event loop; the
        // mapping itself is kind-agnostic.
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&key), Some(Action::Editor(Event::Quit)));
    }
}
