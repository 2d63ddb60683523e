use derive_more::Display;

/// A single step of an edit script between two ordered labeled trees.
///
/// `node` is the postorder position of the affected node, counted within the
/// tree the operation reads from: the left tree for [Relabel][EditOp::Relabel]
/// and [Delete][EditOp::Delete], the right tree for [Insert][EditOp::Insert].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display)]
pub enum EditOp {
    /// Rewrite the label of a node of the left tree; only ever reported when
    /// the labels actually differ.
    #[display(fmt = "relabel {} -> {}", old, new)]
    Relabel {
        node: usize,
        old: String,
        new: String,
    },

    /// Remove a node from the left tree, promoting its children into its
    /// former position.
    #[display(fmt = "delete {}", label)]
    Delete { node: usize, label: String },

    /// Introduce a node of the right tree, adopting in its place the children
    /// it covers there.
    #[display(fmt = "insert {}", label)]
    Insert { node: usize, label: String },
}

impl EditOp {
    pub(crate) fn relabel(node: usize, old: &str, new: &str) -> Self {
        EditOp::Relabel {
            node,
            old: old.to_string(),
            new: new.to_string(),
        }
    }

    pub(crate) fn delete(node: usize, label: &str) -> Self {
        EditOp::Delete {
            node,
            label: label.to_string(),
        }
    }

    pub(crate) fn insert(node: usize, label: &str) -> Self {
        EditOp::Insert {
            node,
            label: label.to_string(),
        }
    }
}
