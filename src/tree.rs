use derive_more::From;
use itertools::Itertools;
use std::fmt;

/// An ordered labeled tree in canonical form.
///
/// Labels need not be unique and child order is significant; two trees compare
/// equal only if their labels and child orders agree. A [CanonicalTree] is
/// built once per input graph by the [TreeBuilder][crate::TreeBuilder] and
/// never mutated afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Hash, From)]
pub struct CanonicalTree {
    label: String,
    children: Vec<CanonicalTree>,
}

impl CanonicalTree {
    /// A leaf with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_children(label, Vec::new())
    }

    /// A node with the given label and children, leftmost first.
    pub fn with_children(label: impl Into<String>, children: Vec<CanonicalTree>) -> Self {
        CanonicalTree {
            label: label.into(),
            children,
        }
    }

    /// This node's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// This node's immediate children, leftmost first.
    pub fn children(&self) -> &[CanonicalTree] {
        &self.children
    }

    /// The number of nodes in this tree, including the root.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(CanonicalTree::count).sum::<usize>()
    }
}

impl fmt::Display for CanonicalTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;

        if !self.children.is_empty() {
            write!(f, "({})", self.children.iter().format(", "))?;
        }

        Ok(())
    }
}
