//! Identifier for embedded text controls.

/// Opaque identifier for a control inside a [`TextControlStore`](crate::TextControlStore).
///
/// The widget layer derives it from the node id of the `<input>` element it
/// creates; the value has no meaning inside this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

impl ControlId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u32> for ControlId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(u64::from(raw))
    }
}

impl From<ControlId> for u64 {
    #[inline]
    fn from(id: ControlId) -> Self {
        id.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn control_id_from_u32_keeps_value() {
        let id = ControlId::from(7u32);
        assert_eq!(id.as_raw(), 7);
        assert_eq!(u64::from(id), 7);
    }

    #[test]
    fn control_ids_hash_by_value() {
        let mut set = HashSet::new();
        set.insert(ControlId::from_raw(1));
        set.insert(ControlId::from_raw(2));
        set.insert(ControlId::from_raw(1));
        assert_eq!(set.len(), 2);
    }
}
