//! Key and mouse mapping from terminal events to arcade input events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use tui_arcade_types::{InputEvent, Key};

/// Map a key code into the arcade key model.
///
/// Each direction concept has an arrow key and a legacy letter alias.
pub fn map_key(code: KeyCode) -> Key {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,

        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a terminal event to a normalized input event.
///
/// Returns `None` for events the arcade ignores (mouse movement and drags,
/// scroll, focus, paste). Resize is also ignored here; the renderer notices
/// size changes on its own. `Click` coordinates are raw terminal coordinates;
/// the backend translates them into surface coordinates.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => match key.kind {
            KeyEventKind::Press => {
                if should_quit(*key) {
                    return Some(InputEvent::Quit);
                }
                Some(InputEvent::KeyDown(map_key(key.code)))
            }
            KeyEventKind::Release => Some(InputEvent::KeyUp(map_key(key.code))),
            // Terminal auto-repeat; pressed-state tracking repeats on its own.
            KeyEventKind::Repeat => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(InputEvent::Click {
            x: *column,
            y: *row,
        }),
        _ => None,
    }
}
