use crate::error::DomError;
use crate::types::{ElementData, NodeId, NodeKind, NodeRecord};

/// Arena of nodes rooted at [`NodeId::ROOT`].
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<NodeRecord>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeRecord {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Document,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // The document node is always present.
        false
    }

    pub fn contains(&self, id: NodeId) -> bool {
        (id.0 as usize) < self.nodes.len()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeRecord {
            parent: None,
            children: Vec::new(),
            kind,
        });
        id
    }

    /// Create a detached element.
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(NodeKind::Element(ElementData::new(name)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    fn record(&self, id: NodeId) -> Result<&NodeRecord, DomError> {
        self.nodes
            .get(id.0 as usize)
            .ok_or(DomError::UnknownNode(id))
    }

    fn record_mut(&mut self, id: NodeId) -> Result<&mut NodeRecord, DomError> {
        self.nodes
            .get_mut(id.0 as usize)
            .ok_or(DomError::UnknownNode(id))
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0 as usize).map(|r| &r.kind)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.kind(id)? {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        match &mut self.record_mut(id)?.kind {
            NodeKind::Element(data) => Ok(data),
            _ => Err(DomError::NotAnElement(id)),
        }
    }

    /// Lowercased tag name of an element.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.name.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0 as usize).and_then(|r| r.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0 as usize)
            .map(|r| r.children.as_slice())
            .unwrap_or(&[])
    }

    /// `id` followed by its parent chain up to the topmost ancestor.
    pub fn ancestors_inclusive(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let start = self.contains(id).then_some(id);
        std::iter::successors(start, move |&cur| self.parent(cur))
    }

    /// True when the node hangs (transitively) off the document node.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.ancestors_inclusive(id).any(|n| n == NodeId::ROOT)
    }

    /// Nearest inclusive ancestor element for which `pred` holds.
    pub fn closest(&self, id: NodeId, mut pred: impl FnMut(&ElementData) -> bool) -> Option<NodeId> {
        self.ancestors_inclusive(id)
            .find(|&n| self.element(n).is_some_and(&mut pred))
    }

    /// Nearest inclusive ancestor element with tag `name`.
    pub fn closest_named(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.closest(id, |e| e.name.eq_ignore_ascii_case(name))
    }

    /// Descendants of `id` in document order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }

    /// Append `child` as last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if matches!(self.record(parent)?.kind, NodeKind::Text(_)) {
            return Err(DomError::InvalidParent(parent));
        }
        self.record(child)?;
        if child == NodeId::ROOT || self.ancestors_inclusive(parent).any(|n| n == child) {
            return Err(DomError::CycleDetected { parent, child });
        }

        self.detach(child);
        self.record_mut(parent)?.children.push(child);
        self.record_mut(child)?.parent = Some(parent);
        Ok(())
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.record(parent)?;
        if self.record(child)?.parent != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(())
    }

    fn detach(&mut self, child: NodeId) {
        let Some(old_parent) = self.parent(child) else {
            return;
        };
        if let Some(rec) = self.nodes.get_mut(old_parent.0 as usize) {
            rec.children.retain(|&c| c != child);
        }
        if let Some(rec) = self.nodes.get_mut(child.0 as usize) {
            rec.parent = None;
        }
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id)
            .is_some_and(|e| e.attr_entry(name).is_some())
    }

    /// Attribute value; valueless attributes read as `""`.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?
            .attr_entry(name)
            .map(|v| v.as_deref().unwrap_or(""))
    }

    /// Set (or add) an attribute and return its previous value.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: Option<&str>,
    ) -> Result<Option<String>, DomError> {
        let element = self.element_mut(id)?;
        let value = value.map(str::to_string);
        if let Some((_, slot)) = element
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            let old = std::mem::replace(slot, value);
            return Ok(Some(old.unwrap_or_default()));
        }
        element.attributes.push((name.to_ascii_lowercase(), value));
        Ok(None)
    }

    /// Remove an attribute and return its previous value, if it was present.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<Option<String>, DomError> {
        let element = self.element_mut(id)?;
        let Some(pos) = element
            .attributes
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))
        else {
            return Ok(None);
        };
        let (_, old) = element.attributes.remove(pos);
        Ok(Some(old.unwrap_or_default()))
    }

    /// Set or remove a valueless boolean attribute.
    pub fn toggle_attribute(&mut self, id: NodeId, name: &str, on: bool) -> Result<(), DomError> {
        if on {
            if !self.has_attribute(id, name) {
                self.set_attribute(id, name, None)?;
            }
        } else {
            self.remove_attribute(id, name)?;
        }
        Ok(())
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.element(id)?
            .style
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(property))
            .map(|(_, v)| v.as_str())
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) -> Result<(), DomError> {
        let element = self.element_mut(id)?;
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim().to_string();
        match element.style.iter_mut().find(|(k, _)| *k == property) {
            Some((_, slot)) => *slot = value,
            None => element.style.push((property, value)),
        }
        Ok(())
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(NodeKind::Text(text)) = self.kind(id) {
            out.push_str(text);
            return out;
        }
        for n in self.descendants(id) {
            if let Some(NodeKind::Text(text)) = self.kind(n) {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace all children with a single text node (none for `""`).
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        if let NodeKind::Text(existing) = &mut self.record_mut(id)?.kind {
            existing.clear();
            existing.push_str(text);
            return Ok(());
        }

        // Reuse a lone text child so repeated renders do not grow the arena.
        let lone_text = match self.children(id) {
            [only] if matches!(self.kind(*only), Some(NodeKind::Text(_))) => Some(*only),
            _ => None,
        };
        if let Some(only) = lone_text
            && !text.is_empty()
        {
            if let NodeKind::Text(existing) = &mut self.record_mut(only)?.kind {
                existing.clear();
                existing.push_str(text);
            }
            return Ok(());
        }

        for child in self.children(id).to_vec() {
            self.detach(child);
        }
        if !text.is_empty() {
            let t = self.create_text(text);
            self.append_child(id, t)?;
        }
        Ok(())
    }
}
