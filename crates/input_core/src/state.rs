//! Per-control state kept by the store.

/// Internal state for one embedded control.
///
/// Not exposed publicly; managed by [`TextControlStore`](crate::TextControlStore).
#[derive(Clone, Debug, Default)]
pub(crate) struct ControlState {
    pub text: String,

    /// Incremented on every text change, including programmatic writes.
    pub text_rev: u64,

    /// Byte index into `text`, always on a char boundary.
    pub caret: usize,

    /// When `Some(anchor)`, the selection is `min(anchor, caret)..max(anchor, caret)`.
    pub selection_anchor: Option<usize>,

    pub focused: bool,
}
