use dom::dom_utils::has_class;
use dom::{Document, NodeId};

/// Class a form carries once the user attempted to submit it.
pub const SUBMITTED_CLASS: &str = "submitted";

/// The keys a form is reachable under: its `id` and its `name` attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormKeys {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl FormKeys {
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn form_keys(doc: &Document, form: NodeId) -> FormKeys {
    FormKeys {
        id: non_empty(doc.attribute(form, "id")),
        name: non_empty(doc.attribute(form, "name")),
    }
}

/// The form a node belongs to: its nearest `<form>` ancestor.
pub fn form_owner(doc: &Document, node: NodeId) -> Option<NodeId> {
    let parent = doc.parent(node)?;
    doc.closest_named(parent, "form")
}

/// Whether the form owning `node` carries the `submitted` class.
pub fn is_submitted(doc: &Document, node: NodeId) -> bool {
    form_owner(doc, node).is_some_and(|form| has_class(doc, form, SUBMITTED_CLASS))
}
