use crate::fetch::PageSource;
use crate::ui::app::{App, NavAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    Nav(NavAction),
}

pub fn handle_key<S: PageSource>(app: &mut App<S>, key: KeyEvent) -> InputAction {
    let action = map_key(key);
    match action {
        InputAction::Quit => app.request_quit(),
        InputAction::Nav(nav) => app.on_nav(nav),
        InputAction::None => {}
    }
    action
}

pub fn map_key(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Home | KeyCode::Char('g') => InputAction::Nav(NavAction::First),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
            InputAction::Nav(NavAction::Prev)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
            InputAction::Nav(NavAction::Next)
        }
        KeyCode::End | KeyCode::Char('G') => InputAction::Nav(NavAction::Last),
        KeyCode::Char('r') => InputAction::Nav(NavAction::Refresh),
        _ => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_letters_navigate() {
        assert_eq!(map_key(press(KeyCode::Left)), InputAction::Nav(NavAction::Prev));
        assert_eq!(map_key(press(KeyCode::Char('n'))), InputAction::Nav(NavAction::Next));
        assert_eq!(map_key(press(KeyCode::Home)), InputAction::Nav(NavAction::First));
        assert_eq!(map_key(press(KeyCode::Char('G'))), InputAction::Nav(NavAction::Last));
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_does_not() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), InputAction::Quit);
        assert_eq!(map_key(press(KeyCode::Char('c'))), InputAction::None);
    }

    #[test]
    fn release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), InputAction::None);
    }
}
