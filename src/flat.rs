use crate::CanonicalTree;

/// Label of the anchor node appended past the end of a flattened forest so
/// that forests and single trees share one comparison path. The two anchors
/// always match each other at zero cost and never surface in the edit script.
const ANCHOR_LABEL: &str = "";

/// A forest flattened into postorder arrays, the shape the edit distance
/// recurrence works on.
///
/// Index `i` refers to the `i`-th node in postorder. `llds[i]` is the
/// postorder index of that node's leftmost leaf descendant, and `keyroots`
/// holds, in ascending order, every node that either is the anchor or has a
/// left sibling.
#[derive(Debug)]
pub(crate) struct Flat<'t> {
    labels: Vec<&'t str>,
    llds: Vec<usize>,
    keyroots: Vec<usize>,
}

impl<'t> Flat<'t> {
    pub fn from_roots(roots: &[&'t CanonicalTree]) -> Self {
        let mut flat = Flat {
            labels: Vec::new(),
            llds: Vec::new(),
            keyroots: Vec::new(),
        };

        for (i, root) in roots.iter().enumerate() {
            flat.walk(root, i > 0);
        }

        let anchor = flat.labels.len();
        flat.labels.push(ANCHOR_LABEL);
        flat.llds.push(0);
        flat.keyroots.push(anchor);
        flat
    }

    // Returns the leftmost leaf of the subtree it just numbered. Keyroots come
    // out ascending because a node is recorded only after its whole subtree.
    fn walk(&mut self, tree: &'t CanonicalTree, keyroot: bool) -> usize {
        let mut lld = None;
        for (i, child) in tree.children().iter().enumerate() {
            let leftmost = self.walk(child, i > 0);
            lld.get_or_insert(leftmost);
        }

        let index = self.labels.len();
        let lld = lld.unwrap_or(index);

        self.labels.push(tree.label());
        self.llds.push(lld);
        if keyroot {
            self.keyroots.push(index);
        }

        lld
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn label(&self, i: usize) -> &'t str {
        self.labels[i]
    }

    pub fn lld(&self, i: usize) -> usize {
        self.llds[i]
    }

    pub fn keyroots(&self) -> &[usize] {
        &self.keyroots
    }
}
