/*!
# Arc Reordering

Both testers rely on a canonical order of out-arcs / children that is computed with a
bucket sort in linear time.
*/

use super::palm_tree::*;
use crate::*;

/// Sorting key of an arc `(v, w)` for the path-addition test.
///
/// Back arcs are keyed by `2 * dfs[w]`; tree arcs by `2 * lowpt1[w]`, plus one if the subtree
/// of `w` has a second attachment strictly below `v` (`lowpt2[w] < dfs[v]`).
fn arc_cost(tree: &PalmTree, arc: &Arc) -> usize {
    let (v, w) = (arc.source, arc.target);
    if arc.is_tree_arc {
        let base = 2 * tree.lowpt1(w) as usize;
        if tree.lowpt2(w) >= tree.dfs(v) {
            base
        } else {
            base + 1
        }
    } else {
        2 * tree.dfs(w) as usize
    }
}

/// Reorders the out-arcs of every node by increasing [`arc_cost`].
/// The sort is stable so that arcs with equal keys keep their DFS order.
pub(super) fn sort_arcs_by_cost(tree: &mut PalmTree) {
    let n = tree.number_of_nodes() as usize;

    let mut buckets: Vec<Vec<ArcId>> = vec![Vec::new(); 2 * n + 1];
    for (id, arc) in tree.arcs().iter().enumerate() {
        buckets[arc_cost(tree, arc)].push(id as ArcId);
    }

    let mut out: Vec<Vec<ArcId>> = (0..n)
        .map(|u| Vec::with_capacity(tree.out_arcs(u as Node).len()))
        .collect();
    for a in buckets.into_iter().flatten() {
        out[tree.arc(a).source as usize].push(a);
    }

    tree.set_out_arcs(out);
}

/// Returns, for every DFS number `p`, the DFS numbers of the children of `tree.node_at(p)`
/// sorted by increasing `lowpt1` (stable in discovery order).
pub(super) fn children_by_lowpoint(tree: &PalmTree) -> Vec<Vec<Node>> {
    let n = tree.number_of_nodes() as usize;

    let mut buckets: Vec<Vec<Node>> = vec![Vec::new(); n];
    for &c in &tree.preorder()[1..] {
        buckets[tree.lowpt1(c) as usize].push(c);
    }

    let mut children: Vec<Vec<Node>> = vec![Vec::new(); n];
    for c in buckets.into_iter().flatten() {
        if let Some(p) = tree.parent_of(c) {
            children[tree.dfs(p) as usize].push(tree.dfs(c));
        }
    }

    children
}
