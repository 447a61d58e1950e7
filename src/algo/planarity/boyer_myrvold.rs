/*!
# Edge Addition

The Boyer–Myrvold planarity test.

Vertices are processed in reverse DFS order. Every tree edge `(p, c)` starts as its own
biconnected component (*bicomp*) whose root is a *virtual* copy `R_c` of `p`. When processing
vertex `i`, the back edges from descendants to `i` are added:

- the *walk-up* marks, for every back edge, the bicomps that have to be merged before the edge
  can be embedded (they are *pertinent*),
- the *walk-down* traverses the external faces of the bicomps rooted at copies of `i`, merges
  pertinent child bicomps at cut vertices and embeds the back edges. It never passes a vertex
  that still has to be reachable from ancestors of `i` (*externally active*).

A back edge that cannot be embedded proves that the graph is not planar.

Every vertex keeps its incident arcs in a doubly linked list whose two ends are the arcs on the
external face. Flipping a bicomp only inverts the list of its root and records a sign on the
tree arc to the root's child; all other orientations are fixed in a final pass.
*/

use super::{component::*, palm_tree::*, reorder::*, *};

const NIL: u32 = u32::MAX;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ArcType {
    /// Tree arc from a parent (or virtual root) to its child
    Child,
    /// Tree arc from a child to its parent (or virtual root)
    Parent,
    /// Back edge as seen from the ancestor
    Forward,
    /// Back edge as seen from the descendant
    Back,
}

#[derive(Debug, Copy, Clone)]
struct BmArc {
    target: u32,
    twin: u32,
    /// `link[s]` is the neighbor of this arc in the adjacency list towards end `s`
    link: [u32; 2],
    edge: EdgeId,
    kind: ArcType,
    /// For child arcs: the subtree below has to be mirrored
    inverted: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Activity {
    Inactive,
    InternallyActive,
    ExternallyActive,
}

/// Disjoint doubly linked lists of DFS children, one list per vertex.
/// A child is linked into at most one list at a time, so every operation is `O(1)`.
struct ChildLists {
    head: Vec<u32>,
    tail: Vec<u32>,
    next: Vec<u32>,
    prev: Vec<u32>,
}

impl ChildLists {
    fn new(n: usize) -> Self {
        Self {
            head: vec![NIL; n],
            tail: vec![NIL; n],
            next: vec![NIL; n],
            prev: vec![NIL; n],
        }
    }

    /// One list per vertex holding its children in the given order
    fn from_sorted(sorted_children: &[Vec<Node>]) -> Self {
        let mut lists = Self::new(sorted_children.len());
        for (p, children) in sorted_children.iter().enumerate() {
            for &c in children {
                lists.push_back(p as u32, c);
            }
        }
        lists
    }

    fn first(&self, p: u32) -> Option<u32> {
        let c = self.head[p as usize];
        (c != NIL).then_some(c)
    }

    fn is_empty(&self, p: u32) -> bool {
        self.head[p as usize] == NIL
    }

    fn is_linked(&self, p: u32, c: u32) -> bool {
        self.head[p as usize] == c || self.prev[c as usize] != NIL
    }

    fn push_front(&mut self, p: u32, c: u32) {
        debug_assert!(!self.is_linked(p, c));
        let old = self.head[p as usize];
        self.next[c as usize] = old;
        if old == NIL {
            self.tail[p as usize] = c;
        } else {
            self.prev[old as usize] = c;
        }
        self.head[p as usize] = c;
    }

    fn push_back(&mut self, p: u32, c: u32) {
        debug_assert!(!self.is_linked(p, c));
        let old = self.tail[p as usize];
        self.prev[c as usize] = old;
        if old == NIL {
            self.head[p as usize] = c;
        } else {
            self.next[old as usize] = c;
        }
        self.tail[p as usize] = c;
    }

    /// Unlinks `c` from the list of `p`
    fn remove(&mut self, p: u32, c: u32) {
        debug_assert!(self.is_linked(p, c));
        let (prev, next) = (self.prev[c as usize], self.next[c as usize]);
        if prev == NIL {
            self.head[p as usize] = next;
        } else {
            self.next[prev as usize] = next;
        }
        if next == NIL {
            self.tail[p as usize] = prev;
        } else {
            self.prev[next as usize] = prev;
        }
        self.prev[c as usize] = NIL;
        self.next[c as usize] = NIL;
    }
}

/// Vertices are identified by their DFS number `0..n`; `n + c` is the virtual root of the
/// bicomp containing the tree edge into child `c`.
struct EdgeAddition<'a> {
    tree: &'a PalmTree,
    n: u32,

    arcs: Vec<BmArc>,
    ends: Vec<[u32; 2]>,

    parent: Vec<u32>,
    lowpoint: Vec<u32>,
    least_ancestor: Vec<u32>,
    children: Vec<Vec<Node>>,
    separated: ChildLists,
    root_child_arc: Vec<u32>,

    forward_arcs: Vec<Vec<u32>>,
    unembedded: Vec<u32>,

    visited: Vec<u32>,
    pertinent_arc: Vec<u32>,
    /// Children `c` whose bicomp root `n + c` is pertinent, internally active ones first
    pertinent_roots: ChildLists,

    merge_stack: Vec<(u32, usize)>,
}

impl<'a> EdgeAddition<'a> {
    fn new(tree: &'a PalmTree) -> Self {
        let n = tree.number_of_nodes();
        let children = children_by_lowpoint(tree);
        let separated = ChildLists::from_sorted(&children);

        let mut state = Self {
            tree,
            n,
            arcs: Vec::with_capacity(2 * tree.number_of_arcs() as usize),
            ends: vec![[NIL; 2]; 2 * n as usize],
            parent: vec![NIL; n as usize],
            lowpoint: vec![0; n as usize],
            least_ancestor: (0..n).collect(),
            children,
            separated,
            root_child_arc: vec![NIL; n as usize],
            forward_arcs: vec![Vec::new(); n as usize],
            unembedded: vec![0; n as usize],
            visited: vec![NIL; 2 * n as usize],
            pertinent_arc: vec![NIL; n as usize],
            pertinent_roots: ChildLists::new(n as usize),
            merge_stack: Vec::new(),
        };

        for u in 0..n {
            state.lowpoint[u as usize] = tree.lowpt1(tree.node_at(u));
        }

        for arc in tree.arcs() {
            let (s, t) = (tree.dfs(arc.source), tree.dfs(arc.target));
            if arc.is_tree_arc {
                state.parent[t as usize] = s;

                let root = n + t;
                let (down, up) = state.add_arc_pair(root, t, arc.edge, ArcType::Child, ArcType::Parent);
                state.push_arc(root, down, 0);
                state.push_arc(t, up, 0);
                state.root_child_arc[t as usize] = down;
            } else {
                let (forward, _) = state.add_arc_pair(t, s, arc.edge, ArcType::Forward, ArcType::Back);
                state.forward_arcs[t as usize].push(forward);
                state.unembedded[t as usize] += 1;
                state.least_ancestor[s as usize] = state.least_ancestor[s as usize].min(t);
            }
        }

        state
    }

    /// Creates the arc `u -> v` and its twin; neither is linked into an adjacency list yet
    fn add_arc_pair(&mut self, u: u32, v: u32, edge: EdgeId, kind: ArcType, twin_kind: ArcType) -> (u32, u32) {
        let a = self.arcs.len() as u32;
        let new_arc = |target, twin, kind| BmArc {
            target,
            twin,
            link: [NIL; 2],
            edge,
            kind,
            inverted: false,
        };
        self.arcs.push(new_arc(v, a + 1, kind));
        self.arcs.push(new_arc(u, a, twin_kind));
        (a, a + 1)
    }

    /// Inserts arc `a` at end `side` of the adjacency list of `v`
    fn push_arc(&mut self, v: u32, a: u32, side: usize) {
        let old = self.ends[v as usize][side];
        self.arcs[a as usize].link = [NIL; 2];
        if old == NIL {
            self.ends[v as usize] = [a, a];
        } else {
            self.arcs[old as usize].link[side] = a;
            self.arcs[a as usize].link[1 - side] = old;
            self.ends[v as usize][side] = a;
        }
    }

    /// Mirrors the adjacency list of `v`
    fn invert(&mut self, v: u32) {
        let mut a = self.ends[v as usize][0];
        while a != NIL {
            let next = self.arcs[a as usize].link[1];
            self.arcs[a as usize].link.swap(0, 1);
            a = next;
        }
        self.ends[v as usize].swap(0, 1);
    }

    /// Leaves `cur` through the external face arc opposite to `prev` and returns the next
    /// vertex together with the side through which it was entered.
    fn next_on_external_face(&self, cur: u32, prev: usize) -> (u32, usize) {
        let a = self.arcs[self.ends[cur as usize][1 - prev] as usize];
        let next = a.target;
        let [first, last] = self.ends[next as usize];

        let next_prev = if first == last {
            prev
        } else if a.twin == first {
            0
        } else {
            1
        };
        (next, next_prev)
    }

    fn is_virtual(&self, v: u32) -> bool {
        v >= self.n
    }

    fn is_pertinent(&self, w: u32) -> bool {
        self.pertinent_arc[w as usize] != NIL || !self.pertinent_roots.is_empty(w)
    }

    fn activity(&self, w: u32, i: u32) -> Activity {
        let separated_low = self
            .separated
            .first(w)
            .map_or(NIL, |c| self.lowpoint[c as usize]);

        if self.least_ancestor[w as usize] < i || separated_low < i {
            Activity::ExternallyActive
        } else if self.is_pertinent(w) {
            Activity::InternallyActive
        } else {
            Activity::Inactive
        }
    }

    /// Marks the bicomps between the descendant endpoint of `forward` and `i` as pertinent
    fn walkup(&mut self, i: u32, forward: u32) {
        let w = self.arcs[forward as usize].target;
        self.pertinent_arc[w as usize] = forward;

        let (mut zig, mut zig_prev) = (w, 1);
        let (mut zag, mut zag_prev) = (w, 0);

        while zig != i {
            if self.visited[zig as usize] == i || self.visited[zag as usize] == i {
                break;
            }
            self.visited[zig as usize] = i;
            self.visited[zag as usize] = i;

            let root = if self.is_virtual(zig) {
                Some(zig)
            } else if self.is_virtual(zag) {
                Some(zag)
            } else {
                None
            };

            match root {
                Some(root) => {
                    let c = root - self.n;
                    let p = self.parent[c as usize];
                    if p != i {
                        if self.lowpoint[c as usize] < i {
                            self.pertinent_roots.push_back(p, c);
                        } else {
                            self.pertinent_roots.push_front(p, c);
                        }
                    }
                    (zig, zig_prev) = (p, 1);
                    (zag, zag_prev) = (p, 0);
                }
                None => {
                    (zig, zig_prev) = self.next_on_external_face(zig, zig_prev);
                    (zag, zag_prev) = self.next_on_external_face(zag, zag_prev);
                }
            }
        }
    }

    /// First vertex on the external face after `root` (leaving via end `1 - prev`) that is not inactive
    fn next_active_vertex(&self, root: u32, prev: usize, i: u32) -> (u32, usize) {
        let (mut v, mut v_prev) = self.next_on_external_face(root, prev);
        while v != root && self.activity(v, i) == Activity::Inactive {
            (v, v_prev) = self.next_on_external_face(v, v_prev);
        }
        (v, v_prev)
    }

    /// Embeds back edges from `i` into the bicomp rooted at `root`, a virtual copy of `i`.
    /// Returns *false* if the walk gets blocked.
    fn walkdown(&mut self, i: u32, root: u32) -> bool {
        for side in 0..2 {
            let (mut w, mut w_prev) = self.next_on_external_face(root, 1 - side);

            while w != root {
                if self.pertinent_arc[w as usize] != NIL {
                    self.merge_stacked_bicomps();
                    self.embed_back_edge(i, root, side, w, w_prev);
                }

                if let Some(c) = self.pertinent_roots.first(w) {
                    let child_root = self.n + c;
                    self.merge_stack.push((w, w_prev));

                    let x = self.next_active_vertex(child_root, 1, i);
                    let y = self.next_active_vertex(child_root, 0, i);

                    let (next, root_out) = if self.activity(x.0, i) == Activity::InternallyActive {
                        (x, 0)
                    } else if self.activity(y.0, i) == Activity::InternallyActive {
                        (y, 1)
                    } else if self.is_pertinent(x.0) {
                        (x, 0)
                    } else {
                        (y, 1)
                    };

                    self.merge_stack.push((child_root, root_out));
                    (w, w_prev) = next;
                } else if self.activity(w, i) == Activity::Inactive {
                    (w, w_prev) = self.next_on_external_face(w, w_prev);
                } else {
                    // `w` is a stopping vertex; descending into a bicomp that cannot be
                    // traversed is a proof of non-planarity
                    if !self.merge_stack.is_empty() {
                        return false;
                    }
                    break;
                }
            }
        }

        true
    }

    fn embed_back_edge(&mut self, i: u32, root: u32, side: usize, w: u32, w_prev: usize) {
        let forward = self.pertinent_arc[w as usize];
        let back = self.arcs[forward as usize].twin;
        self.pertinent_arc[w as usize] = NIL;
        self.unembedded[i as usize] -= 1;

        self.push_arc(root, forward, side);
        self.push_arc(w, back, w_prev);
        self.arcs[back as usize].target = root;
    }

    /// Merges all bicomps on the merge stack into their cut vertices
    fn merge_stacked_bicomps(&mut self) {
        while let Some((root, root_out)) = self.merge_stack.pop() {
            let Some((z, z_prev)) = self.merge_stack.pop() else {
                unreachable!("bicomp roots are always stacked above their cut vertex");
            };
            let c = root - self.n;

            if z_prev == root_out {
                self.invert(root);
                let child_arc = self.root_child_arc[c as usize];
                self.arcs[child_arc as usize].inverted ^= true;
            }

            self.pertinent_roots.remove(z, c);
            self.separated.remove(z, c);

            self.merge_vertex(z, z_prev, root);
        }
    }

    /// Moves the adjacency list of the virtual root `root` into `w` at end `side`
    fn merge_vertex(&mut self, w: u32, side: usize, root: u32) {
        let mut a = self.ends[root as usize][0];
        while a != NIL {
            let twin = self.arcs[a as usize].twin;
            self.arcs[twin as usize].target = w;
            a = self.arcs[a as usize].link[1];
        }

        let e_w = self.ends[w as usize][side];
        let e_r = self.ends[root as usize][1 - side];
        let e_ext = self.ends[root as usize][side];

        if e_w != NIL {
            self.arcs[e_w as usize].link[side] = e_r;
            self.arcs[e_r as usize].link[1 - side] = e_w;
        } else {
            self.ends[w as usize][1 - side] = e_r;
            self.arcs[e_r as usize].link[1 - side] = NIL;
        }
        self.ends[w as usize][side] = e_ext;
        self.arcs[e_ext as usize].link[side] = NIL;

        self.ends[root as usize] = [NIL; 2];
    }

    /// Adds all back edges; returns *false* if one of them cannot be embedded
    fn test(&mut self) -> bool {
        for i in (0..self.n).rev() {
            for k in 0..self.forward_arcs[i as usize].len() {
                let forward = self.forward_arcs[i as usize][k];
                self.walkup(i, forward);
            }

            for k in 0..self.children[i as usize].len() {
                let root = self.n + self.children[i as usize][k];
                if self.visited[root as usize] == i && !self.walkdown(i, root) {
                    return false;
                }
            }

            if self.unembedded[i as usize] > 0 {
                return false;
            }
        }

        true
    }

    /// Propagates the flip signs of the bicomp rooted at `root` down the tree arcs
    fn orient_bicomp(&mut self, root: u32) {
        let mut stack = vec![(root, false)];
        while let Some((v, inverted)) = stack.pop() {
            if inverted {
                self.invert(v);
            }

            let mut a = self.ends[v as usize][0];
            while a != NIL {
                let arc = &mut self.arcs[a as usize];
                if arc.kind == ArcType::Child {
                    stack.push((arc.target, inverted ^ arc.inverted));
                    arc.inverted = false;
                }
                a = arc.link[1];
            }
        }
    }

    /// Orients and joins the remaining bicomps and reads off the rotations
    /// (indexed by local node ids of the palm tree's graph).
    fn rotations(mut self) -> LocalRotations {
        let n = self.n;
        let remaining_roots = (n..2 * n)
            .filter(|&r| self.ends[r as usize][0] != NIL)
            .collect::<Vec<_>>();

        for &root in &remaining_roots {
            self.orient_bicomp(root);
        }
        for &root in &remaining_roots {
            let p = self.parent[(root - n) as usize];
            self.merge_vertex(p, 0, root);
        }

        let mut rotations = vec![Vec::new(); n as usize];
        for v in 0..n {
            let rotation = &mut rotations[self.tree.node_at(v) as usize];
            let mut a = self.ends[v as usize][0];
            while a != NIL {
                let arc = self.arcs[a as usize];
                debug_assert!(!self.is_virtual(arc.target));
                rotation.push((arc.edge, self.tree.node_at(arc.target)));
                a = arc.link[1];
            }
        }

        rotations
    }
}

/// Boyer–Myrvold test of a connected working graph
pub(super) fn test_component(graph: &WorkingGraph, embed: bool) -> TestOutcome {
    let tree = PalmTree::new(graph, 0);

    let mut state = EdgeAddition::new(&tree);
    if !state.test() {
        return TestOutcome::NotPlanar;
    }

    TestOutcome::Planar(embed.then(|| state.rotations()))
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::{super::augment::*, *};

    fn working_graph(n: NumNodes, edges: impl IntoIterator<Item = Edge>, augment: bool) -> WorkingGraph {
        let graph = AdjArrayUndir::from_edges(n, edges);
        let nodes = (0..n).collect_vec();
        let mut local_id = vec![INVALID_NODE; n as usize];
        let mut working = WorkingGraph::from_component(&graph, &nodes, &mut local_id);
        if augment {
            make_biconnected(&mut working);
        }
        working
    }

    fn clique(n: Node) -> Vec<Edge> {
        (0..n).tuple_combinations().map(|(u, v)| Edge(u, v)).collect()
    }

    #[test]
    fn child_lists() {
        let mut list = ChildLists::from_sorted(&[vec![1, 3, 2], vec![], vec![], vec![]]);
        assert_eq!(list.first(0), Some(1));
        list.remove(0, 3);
        assert_eq!(list.first(0), Some(1));
        list.remove(0, 1);
        assert_eq!(list.first(0), Some(2));
        list.remove(0, 2);
        assert!(list.is_empty(0));
        assert_eq!(list.first(1), None);

        // reinsertion after removal, at both ends and in the middle
        list.push_back(1, 2);
        list.push_front(1, 3);
        list.push_back(1, 0);
        assert_eq!(list.first(1), Some(3));
        list.remove(1, 2);
        list.remove(1, 3);
        assert_eq!(list.first(1), Some(0));
        list.push_back(1, 3);
        list.remove(1, 0);
        assert_eq!(list.first(1), Some(3));
        list.remove(1, 3);
        assert!(list.is_empty(1));
    }

    #[test]
    fn triangle() {
        let graph = working_graph(3, clique(3), false);
        let TestOutcome::Planar(Some(rotations)) = test_component(&graph, true) else {
            panic!("triangles are planar");
        };
        assert!(rotations.iter().all(|r| r.len() == 2));
    }

    #[test]
    fn verdicts() {
        for augment in [false, true] {
            assert!(matches!(
                test_component(&working_graph(4, clique(4), augment), false),
                TestOutcome::Planar(None)
            ));
            assert!(matches!(
                test_component(&working_graph(5, clique(5), augment), true),
                TestOutcome::NotPlanar
            ));

            let k33 = (0..3).cartesian_product(3..6).map(|(u, v)| Edge(u, v)).collect_vec();
            assert!(matches!(
                test_component(&working_graph(6, k33, augment), false),
                TestOutcome::NotPlanar
            ));
        }
    }

    #[test]
    fn tree_without_augmentation() {
        let graph = working_graph(5, [Edge(0, 1), Edge(1, 2), Edge(1, 3), Edge(3, 4)], false);
        let TestOutcome::Planar(Some(rotations)) = test_component(&graph, true) else {
            panic!("trees are planar");
        };
        assert_eq!(rotations.iter().map(|r| r.len()).sum::<usize>(), 8);
    }
}
