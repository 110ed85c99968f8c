//! Constraint checks and the classes they put on the host element.

use dom::dom_utils::toggle_class;
use dom::{Document, DomError, NodeId};

pub const INVALID_CLASS: &str = "invalid";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            step: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Violation {
    Required,
    Min,
    Max,
}

impl Violation {
    pub const ALL: [Violation; 3] = [Violation::Required, Violation::Min, Violation::Max];

    pub fn class_name(self) -> &'static str {
        match self {
            Violation::Required => "required",
            Violation::Min => "min",
            Violation::Max => "max",
        }
    }
}

/// Set of violated constraints. Empty means valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationState {
    bits: u8,
}

impl ValidationState {
    fn bit(v: Violation) -> u8 {
        match v {
            Violation::Required => 1,
            Violation::Min => 2,
            Violation::Max => 4,
        }
    }

    pub fn insert(&mut self, v: Violation) {
        self.bits |= Self::bit(v);
    }

    pub fn contains(&self, v: Violation) -> bool {
        self.bits & Self::bit(v) != 0
    }

    pub fn is_valid(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Violation> + '_ {
        Violation::ALL.into_iter().filter(|v| self.contains(*v))
    }
}

/// Derived state of a field; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Unset,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn derive(value: Option<f64>, state: ValidationState) -> Self {
        if !state.is_valid() {
            FieldStatus::Invalid
        } else if value.is_none() {
            FieldStatus::Unset
        } else {
            FieldStatus::Valid
        }
    }
}

pub fn validate(value: Option<f64>, constraints: &Constraints) -> ValidationState {
    let mut state = ValidationState::default();
    match value {
        None if constraints.required => state.insert(Violation::Required),
        None => {}
        Some(v) => {
            if constraints.min.is_some_and(|min| v < min) {
                state.insert(Violation::Min);
            }
            if constraints.max.is_some_and(|max| v > max) {
                state.insert(Violation::Max);
            }
        }
    }
    state
}

/// Put `invalid` plus one class per violation on `host`, clearing the
/// classes of constraints that now hold.
pub fn apply_classes(doc: &mut Document, host: NodeId, state: ValidationState) -> Result<(), DomError> {
    toggle_class(doc, host, INVALID_CLASS, !state.is_valid())?;
    for v in Violation::ALL {
        toggle_class(doc, host, v.class_name(), state.contains(v))?;
    }
    Ok(())
}
