//! UI events delivered to widgets and the shared text-editing key map.

use input_core::{ControlId, TextEditing};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Char(char),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
    };
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    KeyDown { key: Key, modifiers: Modifiers },
    KeyUp { key: Key, modifiers: Modifiers },
    /// The control text was replaced wholesale (paste, autofill).
    Input(String),
    Focus,
    Blur,
}

impl UiEvent {
    pub fn key_down(key: Key) -> Self {
        UiEvent::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn key_up(key: Key) -> Self {
        UiEvent::KeyUp {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::KeyDown { .. } => "keydown",
            UiEvent::KeyUp { .. } => "keyup",
            UiEvent::Input(_) => "input",
            UiEvent::Focus => "focus",
            UiEvent::Blur => "blur",
        }
    }
}

/// Whether pressing `key` may change the control text.
pub fn key_edits_text(key: Key, modifiers: Modifiers) -> bool {
    match key {
        Key::Backspace | Key::Delete => true,
        Key::Char(_) => !modifiers.ctrl,
        _ => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Ignored,
    /// Caret or selection moved, text untouched.
    Handled,
    TextChanged,
}

/// Apply an editing key to a single-line control.
pub fn apply_edit_key<E: TextEditing + ?Sized>(
    editor: &mut E,
    id: ControlId,
    key: Key,
    modifiers: Modifiers,
) -> EditOutcome {
    let before = editor.text_revision(id);
    match key {
        Key::Char(c) if modifiers.ctrl => {
            if !c.eq_ignore_ascii_case(&'a') {
                return EditOutcome::Ignored;
            }
            editor.select_all(id);
        }
        Key::Char(c) => {
            let mut buf = [0u8; 4];
            editor.insert_text(id, c.encode_utf8(&mut buf));
        }
        Key::Backspace => editor.backspace(id),
        Key::Delete => editor.delete(id),
        Key::ArrowLeft => editor.move_caret_left(id, modifiers.shift),
        Key::ArrowRight => editor.move_caret_right(id, modifiers.shift),
        Key::Home => editor.move_caret_to_start(id, modifiers.shift),
        Key::End => editor.move_caret_to_end(id, modifiers.shift),
        Key::ArrowUp | Key::ArrowDown | Key::Enter | Key::Tab | Key::Escape => {
            return EditOutcome::Ignored;
        }
    }
    if editor.text_revision(id) != before {
        EditOutcome::TextChanged
    } else {
        EditOutcome::Handled
    }
}
