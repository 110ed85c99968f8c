use crate::types::NodeId;
use std::fmt;

/// Structural failures of [`Document`](crate::Document) edits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomError {
    UnknownNode(NodeId),
    NotAnElement(NodeId),
    /// Text nodes cannot hold children.
    InvalidParent(NodeId),
    CycleDetected { parent: NodeId, child: NodeId },
    NotAChild { parent: NodeId, child: NodeId },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::UnknownNode(id) => write!(f, "unknown node #{}", id.0),
            DomError::NotAnElement(id) => write!(f, "node #{} is not an element", id.0),
            DomError::InvalidParent(id) => write!(f, "node #{} cannot have children", id.0),
            DomError::CycleDetected { parent, child } => write!(
                f,
                "inserting #{} under #{} would create a cycle",
                child.0, parent.0
            ),
            DomError::NotAChild { parent, child } => {
                write!(f, "node #{} is not a child of #{}", child.0, parent.0)
            }
        }
    }
}

impl std::error::Error for DomError {}
