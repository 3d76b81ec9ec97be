use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::runtime::AppEvent;
use crate::typing_policy::InputEvent;

/// What a terminal event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Type(InputEvent),
    Start,
    Retry,
    ToggleLanguage,
    ToggleDifficulty,
    Quit,
    Redraw,
    Tick,
    Ignore,
}

/// Translate a terminal event into a command.
///
/// Pasted text is dropped: every character has to be typed.
pub fn map_event(event: &AppEvent) -> Command {
    match event {
        AppEvent::Key(key) => map_key(key),
        AppEvent::Paste(text) => {
            debug!("ignoring paste of {} chars", text.chars().count());
            Command::Ignore
        }
        AppEvent::Resize => Command::Redraw,
        AppEvent::Tick => Command::Tick,
    }
}

pub fn map_key(key: &KeyEvent) -> Command {
    if key.kind == KeyEventKind::Release {
        return Command::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Command::Quit,
            KeyCode::Char('s') => Command::Start,
            KeyCode::Char('l') => Command::ToggleLanguage,
            KeyCode::Char('d') => Command::ToggleDifficulty,
            _ => Command::Ignore,
        };
    }
    if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SUPER) {
        return Command::Ignore;
    }

    match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Tab => Command::Retry,
        KeyCode::Enter => Command::Type(InputEvent::Enter),
        KeyCode::Backspace => Command::Type(InputEvent::Backspace),
        KeyCode::Char(c) => Command::Type(InputEvent::Char(c)),
        _ => Command::Ignore,
    }
}
