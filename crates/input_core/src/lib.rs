//! # input_core
//!
//! Editing state for the text-entry controls embedded inside form widgets.
//!
//! - [`ControlId`]: opaque identifier for an embedded control
//! - [`TextControlStore`]: text, caret, selection and revision per control
//! - [`SelectionRange`]: a normalized byte range inside a control's text
//! - [`TextEditing`]: the editing surface widgets drive from key events
//!
//! The crate knows nothing about documents, widgets or number formats. A
//! widget owns the meaning of the text; this crate only keeps it consistent
//! (caret always on a UTF-8 boundary, selections collapsed after edits,
//! single-line input).

mod id;
mod selection;
mod state;
mod store;
mod text;
mod traits;

pub use id::ControlId;
pub use selection::SelectionRange;
pub use store::TextControlStore;
pub use text::{clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary};
pub use traits::TextEditing;
