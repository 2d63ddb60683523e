use crate::{CanonicalTree, EditOp, Flat};
use arrayvec::ArrayVec;
use pathfinding::matrix::Matrix;

#[derive(Debug, Copy, Clone)]
enum Move {
    Insert,
    Delete,
    Match,
}

/// Computes the edit distance between two ordered labeled trees along with a
/// minimum cost edit script, in the manner of [Zhang and Shasha][zs].
///
/// Every relabel, delete and insert costs one unit; relabeling a node to the
/// label it already carries costs nothing and is omitted from the script, so
/// the distance always equals the script length. Ties between moves are broken
/// in a fixed order, match over delete over insert, which makes the script
/// reproducible. Operations are reported in ascending postorder of the left
/// tree, with inserts interleaved at the position of the surrounding matches.
///
/// Runs in `O(|a|·|b|·min(depth a, leaves a)·min(depth b, leaves b))` time.
///
/// [zs]: https://doi.org/10.1137/0218082
pub fn distance(a: &CanonicalTree, b: &CanonicalTree) -> (usize, Vec<EditOp>) {
    edit_script(&Flat::from_roots(&[a]), &Flat::from_roots(&[b]))
}

/// [distance] generalized to ordered forests; two empty forests are zero
/// apart and yield an empty script.
pub fn forest_distance(a: &[CanonicalTree], b: &[CanonicalTree]) -> (usize, Vec<EditOp>) {
    if a.is_empty() && b.is_empty() {
        return (0, Vec::new());
    }

    let a: Vec<_> = a.iter().collect();
    let b: Vec<_> = b.iter().collect();
    edit_script(&Flat::from_roots(&a), &Flat::from_roots(&b))
}

fn edit_script(a: &Flat, b: &Flat) -> (usize, Vec<EditOp>) {
    let (n, m) = (a.len(), b.len());

    let mut dist = Matrix::new(n, m, 0usize);
    let mut script: Vec<Vec<Vec<EditOp>>> = vec![vec![Vec::new(); m]; n];

    // Ascending keyroot order guarantees every subtree pair a cell depends on
    // has already been filled.
    for &k in a.keyroots() {
        for &l in b.keyroots() {
            keyroot_pair(a, b, k, l, &mut dist, &mut script);
        }
    }

    let ops = std::mem::take(&mut script[n - 1][m - 1]);
    (dist[(n - 1, m - 1)], ops)
}

// Fills the forest distance table for one pair of keyroots, recording the
// subtree distances and scripts it completes along the way. Row `x` and
// column `y` stand for the postorder ranges `lld(k)..lld(k) + x` of the left
// forest and `lld(l)..lld(l) + y` of the right one.
fn keyroot_pair(
    a: &Flat,
    b: &Flat,
    k: usize,
    l: usize,
    dist: &mut Matrix<usize>,
    script: &mut [Vec<Vec<EditOp>>],
) {
    let (alo, blo) = (a.lld(k), b.lld(l));
    let rows = k - alo + 2;
    let cols = l - blo + 2;

    let mut fd = Matrix::new(rows, cols, 0usize);
    let mut fops: Vec<Vec<Vec<EditOp>>> = vec![vec![Vec::new(); cols]; rows];

    for x in 1..rows {
        let i = alo + x - 1;
        fd[(x, 0)] = fd[(x - 1, 0)] + 1;

        let mut ops = fops[x - 1][0].clone();
        ops.push(EditOp::delete(i, a.label(i)));
        fops[x][0] = ops;
    }

    for y in 1..cols {
        let j = blo + y - 1;
        fd[(0, y)] = fd[(0, y - 1)] + 1;

        let mut ops = fops[0][y - 1].clone();
        ops.push(EditOp::insert(j, b.label(j)));
        fops[0][y] = ops;
    }

    for x in 1..rows {
        for y in 1..cols {
            let i = alo + x - 1;
            let j = blo + y - 1;

            // Both rightmost roots span whole subtrees within the current
            // ranges exactly when their leftmost leaves reach the range start.
            let spans = a.lld(i) == alo && b.lld(j) == blo;

            let mut moves = ArrayVec::<(usize, Move), 3>::new();
            moves.push((fd[(x, y - 1)] + 1, Move::Insert));
            moves.push((fd[(x - 1, y)] + 1, Move::Delete));
            moves.push(if spans {
                let relabel = usize::from(a.label(i) != b.label(j));
                (fd[(x - 1, y - 1)] + relabel, Move::Match)
            } else {
                let (p, q) = (a.lld(i) - alo, b.lld(j) - blo);
                (fd[(p, q)] + dist[(i, j)], Move::Match)
            });

            // Later entries win ties, so matches beat deletes beat inserts.
            let (cost, best) = moves
                .into_iter()
                .fold((usize::MAX, Move::Match), |best, m| {
                    if m.0 <= best.0 {
                        m
                    } else {
                        best
                    }
                });

            let ops = match best {
                Move::Insert => {
                    let mut ops = fops[x][y - 1].clone();
                    ops.push(EditOp::insert(j, b.label(j)));
                    ops
                }

                Move::Delete => {
                    let mut ops = fops[x - 1][y].clone();
                    ops.push(EditOp::delete(i, a.label(i)));
                    ops
                }

                Move::Match if spans => {
                    let mut ops = fops[x - 1][y - 1].clone();
                    if a.label(i) != b.label(j) {
                        ops.push(EditOp::relabel(i, a.label(i), b.label(j)));
                    }
                    ops
                }

                Move::Match => {
                    let (p, q) = (a.lld(i) - alo, b.lld(j) - blo);
                    let mut ops = fops[p][q].clone();
                    ops.extend_from_slice(&script[i][j]);
                    ops
                }
            };

            fd[(x, y)] = cost;
            fops[x][y] = ops;

            if spans {
                dist[(i, j)] = cost;
                script[i][j] = fops[x][y].clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::{HashMap, HashSet};
    use test_strategy::proptest;

    fn leaf(label: &str) -> CanonicalTree {
        CanonicalTree::new(label)
    }

    fn node(label: &str, children: Vec<CanonicalTree>) -> CanonicalTree {
        CanonicalTree::with_children(label, children)
    }

    // Rebuilds a tree while dropping and relabeling nodes by their postorder
    // index, promoting the children of dropped nodes into their place.
    fn strip(
        tree: &CanonicalTree,
        dropped: &HashSet<usize>,
        relabeled: &HashMap<usize, &str>,
        next: &mut usize,
    ) -> Vec<CanonicalTree> {
        let mut children = Vec::new();
        for child in tree.children() {
            children.extend(strip(child, dropped, relabeled, next));
        }

        let index = *next;
        *next += 1;

        if dropped.contains(&index) {
            children
        } else {
            let label = relabeled.get(&index).copied().unwrap_or(tree.label());
            vec![CanonicalTree::with_children(label, children)]
        }
    }

    #[proptest]
    fn the_distance_between_identical_trees_is_zero(t: CanonicalTree) {
        assert_eq!(distance(&t, &t), (0, vec![]));
    }

    #[proptest]
    fn the_distance_is_symmetric(a: CanonicalTree, b: CanonicalTree) {
        assert_eq!(distance(&a, &b).0, distance(&b, &a).0);
    }

    #[proptest]
    fn the_distance_satisfies_the_triangle_inequality(
        a: CanonicalTree,
        b: CanonicalTree,
        c: CanonicalTree,
    ) {
        assert!(distance(&a, &c).0 <= distance(&a, &b).0 + distance(&b, &c).0);
    }

    #[proptest]
    fn the_distance_is_bounded_by_the_total_node_count(a: CanonicalTree, b: CanonicalTree) {
        assert!(distance(&a, &b).0 <= a.count() + b.count());
    }

    #[proptest]
    fn every_reported_operation_costs_one_unit(a: CanonicalTree, b: CanonicalTree) {
        let (cost, ops) = distance(&a, &b);
        assert_eq!(cost, ops.len());
    }

    #[proptest]
    fn replaying_the_script_against_one_tree_reaches_the_other(
        a: CanonicalTree,
        b: CanonicalTree,
    ) {
        let (_, ops) = distance(&a, &b);

        let mut dropped = HashSet::new();
        let mut relabeled = HashMap::new();
        let mut inserted = HashSet::new();

        for op in &ops {
            match op {
                EditOp::Delete { node, .. } => {
                    dropped.insert(*node);
                }
                EditOp::Relabel { node, new, .. } => {
                    relabeled.insert(*node, new.as_str());
                }
                EditOp::Insert { node, .. } => {
                    inserted.insert(*node);
                }
            }
        }

        let edited = strip(&a, &dropped, &relabeled, &mut 0);
        let target = strip(&b, &inserted, &HashMap::new(), &mut 0);
        assert_eq!(edited, target);
    }

    #[test]
    fn relabeling_a_single_leaf_costs_one() {
        let a = node("a", vec![leaf("b"), leaf("c")]);
        let b = node("a", vec![leaf("b"), leaf("d")]);

        let (cost, ops) = distance(&a, &b);
        assert_eq!(cost, 1);

        assert_matches!(&ops[..], [EditOp::Relabel { node: 1, old, new }] => {
            assert_eq!(old, "c");
            assert_eq!(new, "d");
        });
    }

    #[test]
    fn growing_a_rightmost_child_costs_one_insert() {
        let a = node("a", vec![leaf("b")]);
        let b = node("a", vec![leaf("b"), leaf("c")]);

        let (cost, ops) = distance(&a, &b);
        assert_eq!(cost, 1);

        assert_matches!(&ops[..], [EditOp::Insert { node: 1, label }] => {
            assert_eq!(label, "c");
        });
    }

    #[test]
    fn the_swapped_comparison_reports_the_mirror_deletion() {
        let a = node("a", vec![leaf("b"), leaf("c")]);
        let b = node("a", vec![leaf("b")]);

        let (cost, ops) = distance(&a, &b);
        assert_eq!(cost, 1);

        assert_matches!(&ops[..], [EditOp::Delete { node: 1, label }] => {
            assert_eq!(label, "c");
        });
    }

    #[test]
    fn the_script_follows_ascending_postorder() {
        let a = node("a", vec![leaf("b"), leaf("c")]);
        let b = node("a", vec![leaf("x"), leaf("d")]);

        let (cost, ops) = distance(&a, &b);
        assert_eq!(cost, 2);
        assert_eq!(ops, [EditOp::relabel(0, "b", "x"), EditOp::relabel(1, "c", "d")]);
    }

    #[test]
    fn inverted_ancestry_costs_a_delete_and_an_insert() {
        // The worked example from Zhang and Shasha: c moves from below d to
        // above it, so c cannot be mapped along with d.
        let a = node(
            "f",
            vec![
                node("d", vec![leaf("a"), node("c", vec![leaf("b")])]),
                leaf("e"),
            ],
        );
        let b = node(
            "f",
            vec![
                node("c", vec![node("d", vec![leaf("a"), leaf("b")])]),
                leaf("e"),
            ],
        );

        assert_eq!(distance(&a, &b).0, 2);
    }

    #[test]
    fn empty_forests_are_zero_apart() {
        assert_eq!(forest_distance(&[], &[]), (0, vec![]));
    }

    #[test]
    fn a_forest_against_nothing_costs_its_node_count() {
        let f = [leaf("a"), node("b", vec![leaf("c")])];

        let (cost, ops) = forest_distance(&f, &[]);
        assert_eq!(cost, 3);
        assert!(ops.iter().all(|op| matches!(op, EditOp::Delete { .. })));
    }

    #[test]
    fn disjoint_roots_are_relabeled_rather_than_rebuilt() {
        let (cost, ops) = distance(&leaf("x"), &leaf("y"));
        assert_eq!(cost, 1);
        assert_eq!(ops, [EditOp::relabel(0, "x", "y")]);
    }
}
