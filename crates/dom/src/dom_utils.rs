//! Class-list and lookup helpers over [`Document`].
//!
//! Classes live in the `class` attribute as whitespace-separated tokens, the
//! same way markup carries them.

use crate::{Document, DomError, NodeId};

pub fn class_list(doc: &Document, id: NodeId) -> Vec<&str> {
    doc.attribute(id, "class")
        .map(|v| v.split_ascii_whitespace().collect())
        .unwrap_or_default()
}

pub fn has_class(doc: &Document, id: NodeId, class: &str) -> bool {
    doc.attribute(id, "class")
        .is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
}

/// Add `class`; returns `true` if it was not present.
pub fn add_class(doc: &mut Document, id: NodeId, class: &str) -> Result<bool, DomError> {
    if has_class(doc, id, class) {
        return Ok(false);
    }
    let mut value = doc.attribute(id, "class").unwrap_or("").trim().to_string();
    if !value.is_empty() {
        value.push(' ');
    }
    value.push_str(class);
    doc.set_attribute(id, "class", Some(&value))?;
    Ok(true)
}

/// Remove `class`; returns `true` if it was present.
pub fn remove_class(doc: &mut Document, id: NodeId, class: &str) -> Result<bool, DomError> {
    if !has_class(doc, id, class) {
        return Ok(false);
    }
    let value = class_list(doc, id)
        .into_iter()
        .filter(|c| *c != class)
        .collect::<Vec<_>>()
        .join(" ");
    doc.set_attribute(id, "class", Some(&value))?;
    Ok(true)
}

/// Force `class` on or off; returns `true` if the class list changed.
pub fn toggle_class(
    doc: &mut Document,
    id: NodeId,
    class: &str,
    on: bool,
) -> Result<bool, DomError> {
    if on {
        add_class(doc, id, class)
    } else {
        remove_class(doc, id, class)
    }
}

/// First descendant element of `root` with tag `name`, in document order.
pub fn find_first_named(doc: &Document, root: NodeId, name: &str) -> Option<NodeId> {
    doc.descendants(root)
        .into_iter()
        .find(|&n| doc.name(n).is_some_and(|t| t.eq_ignore_ascii_case(name)))
}

/// All descendant elements of `root` with tag `name`.
pub fn collect_named(doc: &Document, root: NodeId, name: &str) -> Vec<NodeId> {
    doc.descendants(root)
        .into_iter()
        .filter(|&n| doc.name(n).is_some_and(|t| t.eq_ignore_ascii_case(name)))
        .collect()
}
