use crate::{ident, CanonicalTree, GraphEdge, GraphNode};
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

/// The label given to a synthesized root when the input is not a single tree.
pub const VIRTUAL_ROOT_LABEL: &str = "__root__";

/// Identifiers of graph-styling pseudo-nodes emitted by DOT-like formats.
const DEFAULT_SENTINELS: [&str; 1] = ["node"];

/// The ways turning a graph description into a tree can fail.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum BuildError {
    /// Every identifier appears as an edge destination, so no node can anchor
    /// the tree.
    #[error("graph has {0} node(s) but no root candidate")]
    MalformedGraph(usize),

    /// An identifier was reached twice during materialization, either through
    /// a cycle or through multiple parents.
    #[error("node `{0}` is reachable more than once")]
    CycleDetected(String),

    /// Materialization touched more nodes than the configured budget allows.
    #[error("node budget of {0} exceeded")]
    ResourceExceeded(usize),
}

/// How the root of the canonical tree was resolved.
#[derive(Debug, Clone, Eq, PartialEq)]
enum Root<'g> {
    /// Exactly one identifier has no parent; it anchors the tree as is.
    Real(&'g str),

    /// Zero or several identifiers have no parent; a virtual root adopts them.
    Synthetic(Vec<&'g str>),
}

fn resolve_root(candidates: Vec<&str>, population: usize) -> Result<Root<'_>, BuildError> {
    match candidates.len() {
        0 if population > 0 => Err(BuildError::MalformedGraph(population)),
        1 => Ok(Root::Real(candidates[0])),
        _ => Ok(Root::Synthetic(candidates)),
    }
}

/// Builds one [CanonicalTree] per graph description.
///
/// Construction is deterministic for a fixed input: children are ordered by
/// the numeric-then-lexicographic identifier order regardless of edge
/// ingestion order, and the root is either the unique identifier without a
/// parent or a synthesized virtual root adopting all such identifiers.
///
/// # Example
///
/// ```rust
/// use graph_tree_diff::{GraphEdge, GraphNode, TreeBuilder};
///
/// let nodes = [GraphNode::labeled("1", "a"), GraphNode::labeled("2", "b")];
///
/// let tree = TreeBuilder::new().build(&nodes, &[])?;
/// assert_eq!(tree.to_string(), "__root__(a, b)");
///
/// let tree = TreeBuilder::new().build(&nodes, &[GraphEdge::new("1", "2")])?;
/// assert_eq!(tree.to_string(), "a(b)");
/// # Ok::<(), graph_tree_diff::BuildError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    virtual_root_label: String,
    sentinels: HashSet<String>,
    node_budget: Option<usize>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder {
            virtual_root_label: VIRTUAL_ROOT_LABEL.to_string(),
            sentinels: DEFAULT_SENTINELS.iter().map(ToString::to_string).collect(),
            node_budget: None,
        }
    }

    /// Overrides the label of the synthesized root.
    ///
    /// The label is reserved but not exclusive: a real node carrying the same
    /// label is accepted, it merely makes the output harder to read.
    pub fn virtual_root_label(mut self, label: impl Into<String>) -> Self {
        self.virtual_root_label = label.into();
        self
    }

    /// Replaces the set of identifiers dismissed as source-format artifacts.
    pub fn sentinels<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.sentinels = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Caps how many nodes [build][TreeBuilder::build] may materialize before
    /// giving up with [BuildError::ResourceExceeded].
    pub fn node_budget(mut self, limit: usize) -> Self {
        self.node_budget = Some(limit);
        self
    }

    /// Turns a flat node and edge list into a canonical ordered tree.
    pub fn build(
        &self,
        nodes: &[GraphNode],
        edges: &[GraphEdge],
    ) -> Result<CanonicalTree, BuildError> {
        let labels: BTreeMap<&str, &str> = nodes
            .iter()
            .filter(|n| !self.sentinels.contains(&n.id))
            .map(|n| (n.id.as_str(), n.label.as_deref().unwrap_or(&n.id)))
            .collect();

        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut has_parent = HashSet::new();
        for edge in edges {
            adjacency
                .entry(edge.from.as_str())
                .or_default()
                .push(edge.to.as_str());
            has_parent.insert(edge.to.as_str());
        }

        let candidates: Vec<&str> = labels
            .keys()
            .copied()
            .filter(|id| !has_parent.contains(id))
            .collect();

        let mut materializer = Materializer {
            labels: &labels,
            adjacency: &adjacency,
            visited: HashSet::new(),
            budget: self.node_budget,
            built: 0,
        };

        match resolve_root(candidates, labels.len())? {
            Root::Real(id) => materializer.materialize(id),
            Root::Synthetic(ids) => Ok(CanonicalTree::with_children(
                self.virtual_root_label.clone(),
                ids.into_iter()
                    .sorted_by_key(|id| ident::key(id))
                    .map(|id| materializer.materialize(id))
                    .collect::<Result<_, _>>()?,
            )),
        }
    }
}

struct Materializer<'g> {
    labels: &'g BTreeMap<&'g str, &'g str>,
    adjacency: &'g HashMap<&'g str, Vec<&'g str>>,
    visited: HashSet<&'g str>,
    budget: Option<usize>,
    built: usize,
}

impl<'g> Materializer<'g> {
    fn materialize(&mut self, id: &'g str) -> Result<CanonicalTree, BuildError> {
        if !self.visited.insert(id) {
            return Err(BuildError::CycleDetected(id.to_string()));
        }

        self.built += 1;
        if let Some(limit) = self.budget {
            if self.built > limit {
                return Err(BuildError::ResourceExceeded(limit));
            }
        }

        // Identifiers that only ever appear on an edge fall back to themselves.
        let label = self.labels.get(id).copied().unwrap_or(id);

        let order: Vec<&'g str> = self
            .adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .copied()
            .sorted_by_key(|child| ident::key(child))
            .collect();

        let children = order
            .into_iter()
            .map(|child| self.materialize(child))
            .collect::<Result<_, _>>()?;

        Ok(CanonicalTree::with_children(label, children))
    }
}
