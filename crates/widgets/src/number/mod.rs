//! The `mn-number` widget and the pure pieces behind it.

pub(crate) mod eval;
mod field;
mod format;
mod mode;
mod parse;
mod validate;

pub use eval::{EvalError, EvalErrorCode};
pub use field::{NumberParts, NumericField, PropertyValue};
pub use format::{format, format_with, is_displayable, mask_text, mask_text_with};
pub use mode::{DisplayMode, parse_places};
pub use parse::{parse, parse_entry, parse_entry_with, parse_with};
pub use validate::{
    Constraints, FieldStatus, INVALID_CLASS, ValidationState, Violation, apply_classes, validate,
};

#[cfg(test)]
mod tests;
