/*!
# Palm Trees

A DFS of a connected [`WorkingGraph`] orients every edge exactly once: either as a *tree arc*
from a parent to a child, or as a *back arc* from a descendant to a proper ancestor.
The result is called a palm tree.

While unwinding we compute for every node `v`
- `lowpt1[v]`: the smallest DFS number reachable from the subtree of `v` using at most one back arc,
- `lowpt2[v]`: the second smallest such value (or `dfs[v]` if there is none).

Both values include `dfs[v]` itself, so `lowpt1[v] <= lowpt2[v] <= dfs[v]` always holds.
*/

use super::{component::*, *};

/// Index of an arc in a [`PalmTree`]
pub(super) type ArcId = u32;

/// An oriented edge of a palm tree
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct Arc {
    pub source: Node,
    pub target: Node,
    pub edge: EdgeId,
    pub is_tree_arc: bool,
}

#[derive(Debug, Clone)]
pub(super) struct PalmTree {
    dfs: Vec<Node>,
    order: Vec<Node>,
    parent: Vec<Node>,
    lowpt1: Vec<Node>,
    lowpt2: Vec<Node>,
    arcs: Vec<Arc>,
    out: Vec<Vec<ArcId>>,
}

/// A frame of the explicit DFS call stack: the node and how many incident edges were scanned
struct StackFrame {
    node: Node,
    parent_edge: Option<EdgeId>,
    next_edge: usize,
}

impl PalmTree {
    /// Builds the palm tree of a connected working graph rooted at `root`
    /// ** Panics if `root >= n` **
    pub(super) fn new(graph: &WorkingGraph, root: Node) -> Self {
        let n = graph.number_of_nodes() as usize;
        let mut tree = Self {
            dfs: vec![INVALID_NODE; n],
            order: Vec::with_capacity(n),
            parent: vec![INVALID_NODE; n],
            lowpt1: vec![INVALID_NODE; n],
            lowpt2: vec![INVALID_NODE; n],
            arcs: Vec::with_capacity(graph.number_of_edges() as usize),
            out: vec![Vec::new(); n],
        };

        tree.discover(root);
        let mut call_stack = vec![StackFrame {
            node: root,
            parent_edge: None,
            next_edge: 0,
        }];

        while let Some(frame) = call_stack.last_mut() {
            let v = frame.node;

            let Some(&e) = graph.incident_edges(v).get(frame.next_edge) else {
                call_stack.pop();
                if let Some(p) = tree.parent_of(v) {
                    tree.update_lowpts_from_child(p, v);
                }
                continue;
            };
            frame.next_edge += 1;

            if frame.parent_edge == Some(e) {
                continue;
            }

            let w = graph.opposite(e, v);
            if tree.dfs[w as usize] == INVALID_NODE {
                tree.add_arc(v, w, e, true);
                tree.parent[w as usize] = v;
                tree.discover(w);
                call_stack.push(StackFrame {
                    node: w,
                    parent_edge: Some(e),
                    next_edge: 0,
                });
            } else if tree.dfs[w as usize] < tree.dfs[v as usize] {
                tree.add_arc(v, w, e, false);
                tree.update_lowpts_from_back_arc(v, w);
            }
            // otherwise `w` is a descendant and the edge already is a back arc `w -> v`
        }

        assert_eq!(
            tree.order.len(),
            n,
            "palm trees can only be built for connected graphs"
        );

        tree
    }

    fn discover(&mut self, u: Node) {
        let num = self.order.len() as Node;
        self.dfs[u as usize] = num;
        self.lowpt1[u as usize] = num;
        self.lowpt2[u as usize] = num;
        self.order.push(u);
    }

    fn add_arc(&mut self, source: Node, target: Node, edge: EdgeId, is_tree_arc: bool) {
        self.out[source as usize].push(self.arcs.len() as ArcId);
        self.arcs.push(Arc {
            source,
            target,
            edge,
            is_tree_arc,
        });
    }

    fn update_lowpts_from_child(&mut self, v: Node, w: Node) {
        let (v, w) = (v as usize, w as usize);
        if self.lowpt1[w] < self.lowpt1[v] {
            self.lowpt2[v] = self.lowpt1[v].min(self.lowpt2[w]);
            self.lowpt1[v] = self.lowpt1[w];
        } else if self.lowpt1[w] == self.lowpt1[v] {
            self.lowpt2[v] = self.lowpt2[v].min(self.lowpt2[w]);
        } else {
            self.lowpt2[v] = self.lowpt2[v].min(self.lowpt1[w]);
        }
    }

    fn update_lowpts_from_back_arc(&mut self, v: Node, w: Node) {
        let dfs_w = self.dfs[w as usize];
        let v = v as usize;
        if dfs_w < self.lowpt1[v] {
            self.lowpt2[v] = self.lowpt1[v];
            self.lowpt1[v] = dfs_w;
        } else if dfs_w > self.lowpt1[v] {
            self.lowpt2[v] = self.lowpt2[v].min(dfs_w);
        }
    }

    pub(super) fn number_of_nodes(&self) -> NumNodes {
        self.dfs.len() as NumNodes
    }

    pub(super) fn number_of_arcs(&self) -> NumEdges {
        self.arcs.len() as NumEdges
    }

    pub(super) fn root(&self) -> Node {
        self.order[0]
    }

    /// DFS number of `u`
    pub(super) fn dfs(&self, u: Node) -> Node {
        self.dfs[u as usize]
    }

    /// Node with DFS number `num`
    pub(super) fn node_at(&self, num: Node) -> Node {
        self.order[num as usize]
    }

    /// Nodes in the order they were discovered
    pub(super) fn preorder(&self) -> &[Node] {
        &self.order
    }

    pub(super) fn parent_of(&self, u: Node) -> Option<Node> {
        let p = self.parent[u as usize];
        (p != INVALID_NODE).then_some(p)
    }

    pub(super) fn lowpt1(&self, u: Node) -> Node {
        self.lowpt1[u as usize]
    }

    pub(super) fn lowpt2(&self, u: Node) -> Node {
        self.lowpt2[u as usize]
    }

    pub(super) fn arc(&self, a: ArcId) -> &Arc {
        &self.arcs[a as usize]
    }

    pub(super) fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Outgoing arcs of `u` in their current order
    pub(super) fn out_arcs(&self, u: Node) -> &[ArcId] {
        &self.out[u as usize]
    }

    pub(super) fn first_out_arc(&self, u: Node) -> Option<ArcId> {
        self.out[u as usize].first().copied()
    }

    /// Replaces the out-arc lists; used by the reordering step
    pub(super) fn set_out_arcs(&mut self, out: Vec<Vec<ArcId>>) {
        debug_assert_eq!(out.len(), self.out.len());
        self.out = out;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn working_graph(n: NumNodes, edges: &[(Node, Node)]) -> WorkingGraph {
        let graph = AdjArrayUndir::from_edges(n, edges.iter().copied());
        let nodes: Vec<Node> = (0..n).collect();
        let mut local_id = vec![INVALID_NODE; n as usize];
        WorkingGraph::from_component(&graph, &nodes, &mut local_id)
    }

    #[test]
    fn path() {
        let graph = working_graph(4, &[(0, 1), (1, 2), (2, 3)]);
        let tree = PalmTree::new(&graph, 0);

        assert_eq!(tree.preorder(), &[0, 1, 2, 3]);
        assert_eq!(tree.number_of_arcs(), 3);
        assert!(tree.arcs().iter().all(|a| a.is_tree_arc));
        for u in 0..4 {
            assert_eq!(tree.lowpt1(u), tree.dfs(u));
            assert_eq!(tree.lowpt2(u), tree.dfs(u));
        }
        assert_eq!(tree.parent_of(0), None);
        assert_eq!(tree.parent_of(3), Some(2));
    }

    #[test]
    fn cycle_lowpoints() {
        // 0 - 1 - 2 - 3 - 0 and chord 1 - 3
        let graph = working_graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 3)]);
        let tree = PalmTree::new(&graph, 0);

        assert_eq!(tree.preorder(), &[0, 1, 2, 3]);
        let back_arcs: Vec<_> = tree
            .arcs()
            .iter()
            .filter(|a| !a.is_tree_arc)
            .map(|a| (a.source, a.target))
            .collect();
        assert_eq!(back_arcs, vec![(3, 0), (3, 1)]);

        assert_eq!(tree.lowpt1(3), 0);
        assert_eq!(tree.lowpt2(3), 1);
        assert_eq!(tree.lowpt1(1), 0);
        assert_eq!(tree.lowpt2(1), 1);
    }

    #[test]
    fn lowpoint_invariants_on_random_graphs() {
        use crate::gens::*;
        use rand::SeedableRng;
        use rand_pcg::Pcg64Mcg;

        let rng = &mut Pcg64Mcg::seed_from_u64(0x9a1);
        for _ in 0..50 {
            let mut graph = AdjArrayUndir::new(30);
            graph.connect_path(0..30);
            graph.add_edges(Gnp::new().nodes(30).avg_deg(3.0).stream(rng).filter(|e| e.1 != e.0 + 1));

            let nodes: Vec<Node> = (0..30).collect();
            let mut local_id = vec![INVALID_NODE; 30];
            let working = WorkingGraph::from_component(&graph, &nodes, &mut local_id);
            let tree = PalmTree::new(&working, 0);

            assert_eq!(tree.number_of_arcs(), working.number_of_edges());
            for u in 0..30 {
                assert!(tree.lowpt1(u) <= tree.lowpt2(u));
                assert!(tree.lowpt2(u) <= tree.dfs(u));
            }
            for arc in tree.arcs() {
                if arc.is_tree_arc {
                    assert_eq!(tree.parent_of(arc.target), Some(arc.source));
                } else {
                    assert!(tree.dfs(arc.target) < tree.dfs(arc.source));
                }
            }
        }
    }
}
