//! # widgets
//!
//! Form widgets as custom elements over [`dom::Document`].
//!
//! - [`number`]: the `mn-number` widget (`NumericField`) with its parser,
//!   formatter and constraint checks
//! - [`text`]: the `mn-input` widget (`TextField`)
//! - [`select`]: the `mn-select` definition (`SelectField`)
//! - [`page`]: [`Page`], the runtime that owns the document, the embedded
//!   text controls, the form index and the live widget instances
//!
//! Everything is synchronous: each attribute edit, property write or UI
//! event is handled to completion before the call returns.

mod binding;
pub mod config;
pub mod element;
pub mod event;
pub mod number;
pub mod page;
pub mod select;
pub mod text;

pub use config::{FormatConfig, PageConfig};
pub use element::{CustomElement, ElementConstructor, ElementContext, ElementRegistry};
pub use event::{Key, Modifiers, UiEvent};
pub use number::{DisplayMode, NumericField, PropertyValue};
pub use page::Page;
pub use select::SelectField;
pub use text::TextField;
