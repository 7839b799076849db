//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Store operations
    Refresh,
    AddEntry,

    // Draft field navigation
    NextField,
    PrevField,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,

    // Popups
    DismissNotice,

    // System
    Quit,
}

/// The three draft buffers composing the next entry
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DraftField {
    #[default]
    EntryName,
    TagName,
    TagValue,
}

impl DraftField {
    pub fn next(&self) -> DraftField {
        match self {
            DraftField::EntryName => DraftField::TagName,
            DraftField::TagName => DraftField::TagValue,
            DraftField::TagValue => DraftField::EntryName,
        }
    }

    pub fn prev(&self) -> DraftField {
        match self {
            DraftField::EntryName => DraftField::TagValue,
            DraftField::TagName => DraftField::EntryName,
            DraftField::TagValue => DraftField::TagName,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::EntryName => "Entry",
            DraftField::TagName => "Tag name",
            DraftField::TagValue => "Tag value",
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, input_mode: InputMode, show_notice: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Any key closes the notice
    if show_notice {
        return Some(UiEvent::DismissNotice);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('r') => Some(UiEvent::Refresh),
            KeyCode::Char('s') => Some(UiEvent::AddEntry),
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('r')), InputMode::Normal, false), Some(UiEvent::Refresh));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('s')), InputMode::Normal, false), Some(UiEvent::AddEntry));
        assert_eq!(key_to_ui_event(press(KeyCode::Tab), InputMode::Normal, false), Some(UiEvent::NextField));
    }

    #[test]
    fn test_editing_mode_types_letters() {
        // 'r' is text while editing, not a refresh
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('r')), InputMode::Editing, false),
            Some(UiEvent::CharInput('r'))
        );
    }

    #[test]
    fn test_notice_swallows_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('r')), InputMode::Normal, true),
            Some(UiEvent::DismissNotice)
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(ctrl_c, InputMode::Normal, true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_field_cycle() {
        let f = DraftField::EntryName;
        assert_eq!(f.next().next().next(), f);
        assert_eq!(f.prev(), DraftField::TagValue);
    }
}
