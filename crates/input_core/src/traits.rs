//! Editing surface used by widgets when routing key events.
//!
//! Widgets are written against this trait rather than the concrete store so
//! that key routing can be tested with a recording double.

use crate::id::ControlId;
use crate::selection::SelectionRange;

pub trait TextEditing {
    /// Text of the control, if it exists.
    fn text(&self, id: ControlId) -> Option<&str>;

    /// Revision counter; changes whenever the text changes.
    fn text_revision(&self, id: ControlId) -> u64;

    fn selection(&self, id: ControlId) -> Option<SelectionRange>;

    /// Insert at the caret, replacing any selection. Newlines are dropped.
    fn insert_text(&mut self, id: ControlId, s: &str);

    /// Replace the whole text (paste over everything, IME commit, `input`
    /// event). The caret moves to the end.
    fn replace_text(&mut self, id: ControlId, s: &str);

    /// Delete the selection or the character before the caret.
    fn backspace(&mut self, id: ControlId);

    /// Delete the selection or the character after the caret.
    fn delete(&mut self, id: ControlId);

    fn move_caret_left(&mut self, id: ControlId, selecting: bool);
    fn move_caret_right(&mut self, id: ControlId, selecting: bool);
    fn move_caret_to_start(&mut self, id: ControlId, selecting: bool);
    fn move_caret_to_end(&mut self, id: ControlId, selecting: bool);
    fn select_all(&mut self, id: ControlId);
}

impl TextEditing for crate::store::TextControlStore {
    #[inline]
    fn text(&self, id: ControlId) -> Option<&str> {
        crate::store::TextControlStore::text(self, id)
    }

    #[inline]
    fn text_revision(&self, id: ControlId) -> u64 {
        crate::store::TextControlStore::text_revision(self, id)
    }

    #[inline]
    fn selection(&self, id: ControlId) -> Option<SelectionRange> {
        crate::store::TextControlStore::selection(self, id)
    }

    #[inline]
    fn insert_text(&mut self, id: ControlId, s: &str) {
        crate::store::TextControlStore::insert_text(self, id, s)
    }

    #[inline]
    fn replace_text(&mut self, id: ControlId, s: &str) {
        crate::store::TextControlStore::replace_text(self, id, s)
    }

    #[inline]
    fn backspace(&mut self, id: ControlId) {
        crate::store::TextControlStore::backspace(self, id)
    }

    #[inline]
    fn delete(&mut self, id: ControlId) {
        crate::store::TextControlStore::delete(self, id)
    }

    #[inline]
    fn move_caret_left(&mut self, id: ControlId, selecting: bool) {
        crate::store::TextControlStore::move_caret_left(self, id, selecting)
    }

    #[inline]
    fn move_caret_right(&mut self, id: ControlId, selecting: bool) {
        crate::store::TextControlStore::move_caret_right(self, id, selecting)
    }

    #[inline]
    fn move_caret_to_start(&mut self, id: ControlId, selecting: bool) {
        crate::store::TextControlStore::move_caret_to_start(self, id, selecting)
    }

    #[inline]
    fn move_caret_to_end(&mut self, id: ControlId, selecting: bool) {
        crate::store::TextControlStore::move_caret_to_end(self, id, selecting)
    }

    #[inline]
    fn select_all(&mut self, id: ControlId) {
        crate::store::TextControlStore::select_all(self, id)
    }
}
