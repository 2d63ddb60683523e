use derive_more::From;

/// A node of the input graph description, as yielded by an external parser.
#[derive(Debug, Clone, Eq, PartialEq, Hash, From)]
pub struct GraphNode {
    /// Identifier, unique within one graph.
    pub id: String,

    /// Display label; the identifier stands in when absent.
    pub label: Option<String>,
}

impl GraphNode {
    /// A node whose label defaults to its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        GraphNode {
            id: id.into(),
            label: None,
        }
    }

    /// A node with an explicit label.
    pub fn labeled(id: impl Into<String>, label: impl Into<String>) -> Self {
        GraphNode {
            id: id.into(),
            label: Some(label.into()),
        }
    }
}

/// A directed edge of the input graph description; `from` is the parent of `to`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, From)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

impl GraphEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        GraphEdge {
            from: from.into(),
            to: to.into(),
        }
    }
}
