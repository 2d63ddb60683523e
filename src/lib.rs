//! # Overview
//!
//! This crate compares two labeled hierarchical structures derived from graph
//! descriptions. Each input, a flat list of nodes and parent-to-child edges
//! as produced by an external graph parser, is first coerced into a canonical
//! ordered tree: children are sorted numerically where their identifiers are
//! purely numeric and lexicographically otherwise, and a virtual root adopts
//! the top level whenever the input is a forest rather than a single tree.
//! The two canonical trees are then compared with the [Zhang–Shasha][zs]
//! ordered tree edit distance, which reports the minimum number of relabels,
//! deletions and insertions turning one tree into the other, together with a
//! replayable edit script.
//!
//! [zs]: https://doi.org/10.1137/0218082
//!
//! # Example
//!
//! ```rust
//! use graph_tree_diff::{distance, EditOp, GraphEdge, GraphNode, TreeBuilder};
//!
//! let before = [
//!     GraphNode::labeled("1", "a"),
//!     GraphNode::labeled("2", "b"),
//!     GraphNode::labeled("3", "c"),
//! ];
//!
//! let after = [
//!     GraphNode::labeled("1", "a"),
//!     GraphNode::labeled("2", "b"),
//!     GraphNode::labeled("3", "d"),
//! ];
//!
//! let edges = [GraphEdge::new("1", "2"), GraphEdge::new("1", "3")];
//!
//! let builder = TreeBuilder::new();
//! let old = builder.build(&before, &edges)?;
//! let new = builder.build(&after, &edges)?;
//!
//! assert_eq!(old.to_string(), "a(b, c)");
//! assert_eq!(new.to_string(), "a(b, d)");
//!
//! let (cost, script) = distance(&old, &new);
//!
//! assert_eq!(cost, 1);
//! assert_eq!(script, [EditOp::Relabel {
//!     node: 1,
//!     old: "c".into(),
//!     new: "d".into(),
//! }]);
//!
//! for op in &script {
//!     println!("{op}");
//! }
//! # Ok::<(), graph_tree_diff::BuildError>(())
//! ```

mod build;
mod diff;
mod edit;
mod graph;
mod tree;

pub use build::*;
pub use diff::*;
pub use edit::*;
pub use graph::*;
pub use tree::*;

mod flat;
mod ident;

pub(crate) use flat::*;
