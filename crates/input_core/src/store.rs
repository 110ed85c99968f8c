//! Store for embedded control text, caret and selection.
//!
//! Editing operations on an unknown id are no-ops: a control only exists
//! after its widget called [`TextControlStore::ensure`].

use crate::id::ControlId;
use crate::selection::SelectionRange;
use crate::state::ControlState;
use crate::text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
};
use std::collections::HashMap;

/// Text state for every embedded control on a page.
///
/// ```
/// use input_core::{ControlId, TextControlStore};
///
/// let mut store = TextControlStore::new();
/// let id = ControlId::from_raw(3);
///
/// store.ensure(id);
/// store.focus(id);
/// store.insert_text(id, "12");
/// store.backspace(id);
///
/// assert_eq!(store.text(id), Some("1"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextControlStore {
    controls: HashMap<ControlId, ControlState>,
}

impl TextControlStore {
    pub fn new() -> Self {
        Self {
            controls: HashMap::new(),
        }
    }

    pub fn has(&self, id: ControlId) -> bool {
        self.controls.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Create an empty entry if none exists.
    pub fn ensure(&mut self, id: ControlId) {
        self.controls.entry(id).or_default();
    }

    /// Drop a control's state (its widget left the page).
    pub fn remove(&mut self, id: ControlId) -> bool {
        self.controls.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.controls.clear();
    }

    pub fn text(&self, id: ControlId) -> Option<&str> {
        self.controls.get(&id).map(|s| s.text.as_str())
    }

    pub fn caret(&self, id: ControlId) -> Option<usize> {
        self.controls.get(&id).map(|s| s.caret)
    }

    pub fn selection(&self, id: ControlId) -> Option<SelectionRange> {
        self.controls
            .get(&id)
            .and_then(|s| selection_range(&s.text, s.selection_anchor, s.caret))
    }

    pub fn text_revision(&self, id: ControlId) -> u64 {
        self.controls.get(&id).map(|s| s.text_rev).unwrap_or(0)
    }

    pub fn is_focused(&self, id: ControlId) -> bool {
        self.controls.get(&id).is_some_and(|s| s.focused)
    }

    /// Programmatic write (re-render from a widget value).
    ///
    /// Writing identical text is not a change: the revision stays put and the
    /// caret is left alone, so re-rendering while the user edits is harmless.
    pub fn set(&mut self, id: ControlId, text: &str) -> bool {
        let Some(st) = self.controls.get_mut(&id) else {
            return false;
        };
        if st.text == text {
            return false;
        }
        st.text.clear();
        st.text.push_str(&filter_single_line(text));
        st.caret = st.text.len();
        st.selection_anchor = None;
        mark_text_dirty(st);
        true
    }

    pub fn focus(&mut self, id: ControlId) {
        if let Some(st) = self.controls.get_mut(&id) {
            clamp_state(st);
            clear_selection(st);
            st.focused = true;
        }
    }

    pub fn blur(&mut self, id: ControlId) {
        if let Some(st) = self.controls.get_mut(&id) {
            clamp_state(st);
            clear_selection(st);
            st.focused = false;
        }
    }

    pub fn insert_text(&mut self, id: ControlId, s: &str) {
        let Some(st) = self.controls.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        let s = filter_single_line(s);
        if s.is_empty() {
            return;
        }

        delete_selection_if_any(st);

        let caret = clamp_to_char_boundary(&st.text, st.caret);
        st.text.insert_str(caret, &s);
        st.caret = clamp_to_char_boundary(&st.text, caret + s.len());
        mark_text_dirty(st);
    }

    pub fn replace_text(&mut self, id: ControlId, s: &str) {
        let Some(st) = self.controls.get_mut(&id) else {
            return;
        };
        let s = filter_single_line(s);
        if st.text == s {
            return;
        }
        st.text.clear();
        st.text.push_str(&s);
        st.caret = st.text.len();
        st.selection_anchor = None;
        mark_text_dirty(st);
    }

    pub fn backspace(&mut self, id: ControlId) {
        let Some(st) = self.controls.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        if delete_selection_if_any(st) {
            return;
        }

        let caret = st.caret;
        if caret == 0 {
            return;
        }

        let prev = prev_cursor_boundary(&st.text, caret);
        st.text.drain(prev..caret);
        st.caret = clamp_to_char_boundary(&st.text, prev);
        mark_text_dirty(st);
    }

    pub fn delete(&mut self, id: ControlId) {
        let Some(st) = self.controls.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        if delete_selection_if_any(st) {
            return;
        }

        let caret = st.caret;
        if caret >= st.text.len() {
            return;
        }

        let next = next_cursor_boundary(&st.text, caret);
        st.text.drain(caret..next);
        mark_text_dirty(st);
    }

    pub fn move_caret_left(&mut self, id: ControlId, selecting: bool) {
        let Some(st) = self.controls.get_mut(&id) else {
            return;
        };
        clamp_state(st);

        if selecting {
            let target = prev_cursor_boundary(&st.text, st.caret);
            extend_selection(st, target);
            return;
        }

        st.caret = match selection_range(&st.text, st.selection_anchor, st.caret) {
            Some(sel) => sel.start,
            None => prev_cursor_boundary(&st.text, st.caret),
        };
        clear_selection(st);
    }

    pub fn move_caret_right(&mut self, id: ControlId, selecting: bool) {
        let Some(st) = self.controls.get_mut(&id) else {
            return;
        };
        clamp_state(st);

        if selecting {
            let target = next_cursor_boundary(&st.text, st.caret);
            extend_selection(st, target);
            return;
        }

        st.caret = match selection_range(&st.text, st.selection_anchor, st.caret) {
            Some(sel) => sel.end,
            None => next_cursor_boundary(&st.text, st.caret),
        };
        clear_selection(st);
    }

    pub fn move_caret_to_start(&mut self, id: ControlId, selecting: bool) {
        self.set_caret(id, 0, selecting);
    }

    pub fn move_caret_to_end(&mut self, id: ControlId, selecting: bool) {
        self.set_caret(id, usize::MAX, selecting);
    }

    /// Move the caret to `caret` (clamped), extending the selection if asked.
    pub fn set_caret(&mut self, id: ControlId, caret: usize, selecting: bool) {
        let Some(st) = self.controls.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        let caret = clamp_to_char_boundary(&st.text, caret);
        if selecting {
            extend_selection(st, caret);
        } else {
            st.caret = caret;
            clear_selection(st);
        }
    }

    pub fn select_all(&mut self, id: ControlId) {
        let Some(st) = self.controls.get_mut(&id) else {
            return;
        };
        st.caret = st.text.len();
        st.selection_anchor = Some(0);
        normalize_selection_anchor(st);
    }
}

fn selection_range(text: &str, anchor: Option<usize>, caret: usize) -> Option<SelectionRange> {
    let anchor = anchor?;

    let a = clamp_to_char_boundary(text, anchor);
    let c = clamp_to_char_boundary(text, caret);
    if a == c {
        return None;
    }

    Some(SelectionRange::new(a, c))
}

fn extend_selection(st: &mut ControlState, caret: usize) {
    if st.selection_anchor.is_none() {
        st.selection_anchor = Some(st.caret);
    }
    st.caret = caret;
    normalize_selection_anchor(st);
}

fn normalize_selection_anchor(st: &mut ControlState) {
    let Some(anchor) = st.selection_anchor else {
        return;
    };
    let anchor = clamp_to_char_boundary(&st.text, anchor);

    // A collapsed selection is no selection.
    st.selection_anchor = (anchor != st.caret).then_some(anchor);
}

fn delete_selection_if_any(st: &mut ControlState) -> bool {
    let Some(sel) = selection_range(&st.text, st.selection_anchor, st.caret) else {
        st.selection_anchor = None;
        return false;
    };

    st.text.drain(sel.start..sel.end);
    st.caret = clamp_to_char_boundary(&st.text, sel.start);
    st.selection_anchor = None;
    mark_text_dirty(st);
    true
}

fn clamp_state(st: &mut ControlState) {
    st.caret = clamp_to_char_boundary(&st.text, st.caret);
    if let Some(a) = st.selection_anchor {
        st.selection_anchor = Some(clamp_to_char_boundary(&st.text, a));
    }
}

fn clear_selection(st: &mut ControlState) {
    st.selection_anchor = None;
}

fn mark_text_dirty(st: &mut ControlState) {
    st.text_rev = st.text_rev.wrapping_add(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(text: &str) -> (TextControlStore, ControlId) {
        let mut store = TextControlStore::new();
        let id = ControlId::from_raw(1);
        store.ensure(id);
        store.set(id, text);
        store.focus(id);
        (store, id)
    }

    #[test]
    fn editing_unknown_control_is_a_no_op() {
        let mut store = TextControlStore::new();
        let id = ControlId::from_raw(9);
        store.insert_text(id, "1");
        store.backspace(id);
        assert!(!store.has(id));
        assert_eq!(store.text(id), None);
        assert_eq!(store.text_revision(id), 0);
    }

    #[test]
    fn set_with_identical_text_keeps_revision_and_caret() {
        let (mut store, id) = store_with("10,00");
        let rev = store.text_revision(id);
        store.set_caret(id, 2, false);

        assert!(!store.set(id, "10,00"));
        assert_eq!(store.text_revision(id), rev);
        assert_eq!(store.caret(id), Some(2));

        assert!(store.set(id, "11,00"));
        assert_eq!(store.text_revision(id), rev + 1);
        assert_eq!(store.caret(id), Some(5));
    }

    #[test]
    fn insert_text_drops_newlines_and_keeps_caret_on_boundary() {
        let (mut store, id) = store_with("");
        store.insert_text(id, "1\n2");
        store.insert_text(id, "€");
        let text = store.text(id).unwrap();
        assert_eq!(text, "12€");
        let caret = store.caret(id).unwrap();
        assert_eq!(caret, text.len());
        assert!(text.is_char_boundary(caret));
    }

    #[test]
    fn backspace_and_delete_remove_one_char() {
        let (mut store, id) = store_with("123");
        store.backspace(id);
        assert_eq!(store.text(id), Some("12"));

        store.move_caret_to_start(id, false);
        store.delete(id);
        assert_eq!(store.text(id), Some("2"));
        assert_eq!(store.caret(id), Some(0));

        store.backspace(id);
        assert_eq!(store.text(id), Some("2"));
    }

    #[test]
    fn shift_arrows_select_and_typing_replaces_selection() {
        let (mut store, id) = store_with("1500");
        store.move_caret_left(id, true);
        store.move_caret_left(id, true);
        assert_eq!(store.selection(id), Some(SelectionRange::new(2, 4)));

        store.insert_text(id, "75");
        assert_eq!(store.text(id), Some("1575"));
        assert_eq!(store.selection(id), None);
    }

    #[test]
    fn arrow_without_shift_collapses_selection_to_its_edge() {
        let (mut store, id) = store_with("abcd");
        store.select_all(id);
        store.move_caret_left(id, false);
        assert_eq!(store.caret(id), Some(0));
        assert_eq!(store.selection(id), None);

        store.select_all(id);
        store.move_caret_right(id, false);
        assert_eq!(store.caret(id), Some(4));
    }

    #[test]
    fn select_all_then_backspace_clears_text() {
        let (mut store, id) = store_with("118200");
        store.select_all(id);
        store.backspace(id);
        assert_eq!(store.text(id), Some(""));
        assert_eq!(store.caret(id), Some(0));
    }

    #[test]
    fn replace_text_moves_caret_to_end() {
        let (mut store, id) = store_with("1");
        store.move_caret_to_start(id, false);
        store.replace_text(id, "1*2");
        assert_eq!(store.text(id), Some("1*2"));
        assert_eq!(store.caret(id), Some(3));
    }

    #[test]
    fn focus_and_blur_track_focus_and_clear_selection() {
        let (mut store, id) = store_with("42");
        assert!(store.is_focused(id));
        store.select_all(id);
        store.blur(id);
        assert!(!store.is_focused(id));
        assert_eq!(store.selection(id), None);
    }

    #[test]
    fn remove_forgets_control() {
        let (mut store, id) = store_with("1");
        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.is_empty());
    }
}
