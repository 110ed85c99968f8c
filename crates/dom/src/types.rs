pub type RawNodeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub RawNodeId);

impl NodeId {
    /// The document node of every [`Document`](crate::Document).
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementData {
    pub name: String,
    /// Insertion-ordered. `None` marks a valueless attribute (`<input readonly>`).
    pub attributes: Vec<(String, Option<String>)>,
    pub style: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attributes: Vec::new(),
            style: Vec::new(),
        }
    }

    pub fn attr_entry(&self, name: &str) -> Option<&Option<String>> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element(ElementData),
    Text(String),
}

#[derive(Clone, Debug)]
pub(crate) struct NodeRecord {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub kind: NodeKind,
}
