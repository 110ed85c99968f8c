//! Live element tree for widget hosting.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. Detached nodes stay in the arena, so ids never dangle.
//! Attribute and element names are stored ASCII-lowercased.

mod document;
pub mod dom_utils;
#[cfg(any(test, feature = "dom-snapshot"))]
pub mod dom_snapshot;
mod error;
mod types;

pub use document::Document;
pub use error::DomError;
pub use types::{ElementData, NodeId, NodeKind};
