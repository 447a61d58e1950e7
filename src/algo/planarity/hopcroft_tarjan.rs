/*!
# Path Addition

The Hopcroft–Tarjan planarity test in the formulation popularized by LEDA.

The palm tree of a biconnected graph decomposes into *spines*: starting with a tree arc
`(x, y)` we follow first out-arcs until the first back arc `(wk, w0)`. Every other out-arc of a
spine node starts a *segment* which either is a single back arc or is itself tested recursively.
A segment only interacts with the rest of the graph through its *attachments*, the DFS numbers
of the spine nodes it connects to. Segments whose attachments interlace have to be placed on
different sides of the spine; conflicting requirements are collected in *blocks* whose two
sides can be flipped as a whole. The graph is planar iff no block ever has to put an
interlacing segment on both sides.

Attachment lists are kept in decreasing order: the head is the highest attachment (largest DFS
number) and the tail the lowest.

The embedding phase revisits the same spines and assembles the rotation of every node from the
sides recorded during the test. Both phases run on explicit stacks.
*/

use std::collections::LinkedList;

use super::{component::*, palm_tree::*, reorder::*, *};

/// Side of a spine a segment is placed on
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Two groups of segments that have to be on opposite sides of the spine
#[derive(Debug, Default)]
struct Block {
    latt: LinkedList<Node>,
    ratt: LinkedList<Node>,
    lseg: LinkedList<ArcId>,
    rseg: LinkedList<ArcId>,
}

impl Block {
    fn new(arc: ArcId, attachments: LinkedList<Node>) -> Self {
        Self {
            latt: attachments,
            lseg: LinkedList::from([arc]),
            ..Default::default()
        }
    }

    fn flip(&mut self) {
        std::mem::swap(&mut self.latt, &mut self.ratt);
        std::mem::swap(&mut self.lseg, &mut self.rseg);
    }

    /// The lowest left attachment lies below the highest attachment on the left of `top`
    fn left_interlaces(&self, top: Option<&Block>) -> bool {
        debug_assert!(!self.latt.is_empty());
        matches!(
            (self.latt.back(), top.and_then(|t| t.latt.front())),
            (Some(low), Some(high)) if low < high
        )
    }

    /// The lowest left attachment lies below the highest attachment on the right of `top`
    fn right_interlaces(&self, top: Option<&Block>) -> bool {
        matches!(
            (self.latt.back(), top.and_then(|t| t.ratt.front())),
            (Some(low), Some(high)) if low < high
        )
    }

    fn combine(&mut self, mut other: Block) {
        self.latt.append(&mut other.latt);
        self.ratt.append(&mut other.ratt);
        self.lseg.append(&mut other.lseg);
        self.rseg.append(&mut other.rseg);
    }

    fn record_sides(&self, alpha: &mut [Option<Side>]) {
        for &e in &self.lseg {
            alpha[e as usize] = Some(Side::Left);
        }
        for &e in &self.rseg {
            alpha[e as usize] = Some(Side::Right);
        }
    }

    /// Removes all attachments to `dfs_w`. If nothing remains, the block is finished: the
    /// sides of its segments are recorded and *true* is returned.
    fn clean(&mut self, dfs_w: Node, alpha: &mut [Option<Side>]) -> bool {
        while self.latt.front() == Some(&dfs_w) {
            self.latt.pop_front();
        }
        while self.ratt.front() == Some(&dfs_w) {
            self.ratt.pop_front();
        }

        if !self.latt.is_empty() || !self.ratt.is_empty() {
            return false;
        }

        self.record_sides(alpha);
        true
    }

    /// Appends the attachments of the block to `attachments`, flipping it first so that only
    /// the left side attaches above `w0`.
    fn append_to(mut self, attachments: &mut LinkedList<Node>, dfs_w0: Node, alpha: &mut [Option<Side>]) {
        if self.ratt.front().is_some_and(|&high| high > dfs_w0) {
            self.flip();
        }

        attachments.append(&mut self.latt);
        attachments.append(&mut self.ratt);
        self.record_sides(alpha);
    }
}

/// Darts are arcs together with their reversals: dart `a < m` is arc `a`, dart `a + m` its reversal
type Dart = u32;

/// State of one (virtual) recursive call of the segment test
struct TestFrame {
    arc: ArcId,
    x: Node,
    w0: Node,
    w: Node,
    next_arc: usize,
    blocks: Vec<Block>,
}

/// State of one (virtual) recursive call of the embedding phase
struct EmbedFrame {
    arc: ArcId,
    x: Node,
    w: Node,
    next_arc: usize,
    side: Side,
    back_into_w0: ArcId,
    t: LinkedList<Dart>,
    al: LinkedList<Dart>,
    ar: LinkedList<Dart>,
}

impl EmbedFrame {
    /// Adds the darts `tp` at the current spine node and the darts `ap` leaving ancestors
    fn attach(&mut self, same_side: bool, mut tp: LinkedList<Dart>, mut ap: LinkedList<Dart>) {
        if same_side {
            tp.append(&mut self.t);
            self.t = tp;
            self.al.append(&mut ap);
        } else {
            self.t.append(&mut tp);
            ap.append(&mut self.ar);
            self.ar = ap;
        }
    }
}

struct PathAddition<'a> {
    tree: &'a PalmTree,
    alpha: Vec<Option<Side>>,
}

impl<'a> PathAddition<'a> {
    fn new(tree: &'a PalmTree) -> Self {
        Self {
            tree,
            alpha: vec![None; tree.number_of_arcs() as usize],
        }
    }

    /// Follows first out-arcs from the head of `e0` until the first back arc and returns it
    fn spine_end(&self, e0: ArcId) -> ArcId {
        let tree = self.tree;
        let mut wk = tree.arc(e0).target;
        loop {
            let Some(first) = tree.first_out_arc(wk) else {
                unreachable!("every node of a biconnected graph has an out-arc");
            };
            let arc = tree.arc(first);
            if !arc.is_tree_arc {
                return first;
            }
            wk = arc.target;
        }
    }

    fn test_frame(&self, e0: ArcId) -> TestFrame {
        let back = self.tree.arc(self.spine_end(e0));
        TestFrame {
            arc: e0,
            x: self.tree.arc(e0).source,
            w0: back.target,
            w: back.source,
            next_arc: 1,
            blocks: Vec::new(),
        }
    }

    /// Tests whether the segment starting with tree arc `e0` is strongly planar, recording
    /// the side of every segment in `alpha`.
    fn strongly_planar(&mut self, e0: ArcId) -> bool {
        let tree = self.tree;
        let mut call_stack = vec![self.test_frame(e0)];

        while let Some(frame) = call_stack.last_mut() {
            if frame.w == frame.x {
                let Some(frame) = call_stack.pop() else {
                    break;
                };
                let arc = frame.arc;
                let Some(attachments) = self.collect_attachments(frame) else {
                    return false;
                };

                match call_stack.last_mut() {
                    None => return true,
                    Some(caller) => {
                        if !push_segment(&mut caller.blocks, arc, attachments) {
                            return false;
                        }
                    }
                }
                continue;
            }

            if let Some(&e) = tree.out_arcs(frame.w).get(frame.next_arc) {
                frame.next_arc += 1;

                let arc = tree.arc(e);
                if arc.is_tree_arc {
                    let callee = self.test_frame(e);
                    call_stack.push(callee);
                } else if !push_segment(
                    &mut frame.blocks,
                    e,
                    LinkedList::from([tree.dfs(arc.target)]),
                ) {
                    return false;
                }
                continue;
            }

            // all segments of `w` are placed; drop blocks that only attach at the parent
            let Some(parent) = tree.parent_of(frame.w) else {
                unreachable!("spine nodes are proper descendants of the spine start");
            };
            let dfs_parent = tree.dfs(parent);
            while let Some(top) = frame.blocks.last_mut() {
                if !top.clean(dfs_parent, &mut self.alpha) {
                    break;
                }
                frame.blocks.pop();
            }

            frame.w = parent;
            frame.next_arc = 1;
        }

        true
    }

    /// Merges the remaining blocks of a finished spine into its attachment list
    fn collect_attachments(&mut self, mut frame: TestFrame) -> Option<LinkedList<Node>> {
        let dfs_w0 = self.tree.dfs(frame.w0);
        let mut attachments = LinkedList::new();

        while let Some(block) = frame.blocks.pop() {
            let above_w0 = |att: &LinkedList<Node>| att.front().is_some_and(|&high| high > dfs_w0);
            if above_w0(&block.latt) && above_w0(&block.ratt) {
                return None;
            }
            block.append_to(&mut attachments, dfs_w0, &mut self.alpha);
        }

        if frame.w0 != frame.x {
            attachments.push_back(dfs_w0);
        }

        Some(attachments)
    }

    fn reversal(&self, d: Dart) -> Dart {
        let m = self.tree.number_of_arcs();
        if d < m { d + m } else { d - m }
    }

    fn dart_source(&self, d: Dart) -> Node {
        let m = self.tree.number_of_arcs();
        if d < m {
            self.tree.arc(d).source
        } else {
            self.tree.arc(d - m).target
        }
    }

    fn embed_frame(&self, e0: ArcId, side: Side) -> EmbedFrame {
        let back_into_w0 = self.spine_end(e0);
        EmbedFrame {
            arc: e0,
            x: self.tree.arc(e0).source,
            w: self.tree.arc(back_into_w0).source,
            next_arc: 1,
            side,
            back_into_w0,
            t: LinkedList::from([back_into_w0]),
            al: LinkedList::new(),
            ar: LinkedList::new(),
        }
    }

    /// Assigns every dart a sort number such that sorting the darts leaving a node by it
    /// yields the rotation of that node in a planar embedding.
    /// Requires that `strongly_planar(root_arc)` succeeded.
    fn sort_numbers(&self, root_arc: ArcId) -> Vec<u32> {
        let tree = self.tree;
        let num_darts = 2 * tree.number_of_arcs() as usize;

        let mut tree_into = vec![0 as ArcId; tree.number_of_nodes() as usize];
        for (id, arc) in tree.arcs().iter().enumerate() {
            if arc.is_tree_arc {
                tree_into[arc.target as usize] = id as ArcId;
            }
        }

        let mut sort_num = vec![u32::MAX; num_darts];
        let mut next_num = 0;
        let mut number = |darts: LinkedList<Dart>| {
            for d in darts {
                sort_num[d as usize] = next_num;
                next_num += 1;
            }
        };

        let mut call_stack = vec![self.embed_frame(root_arc, Side::Left)];
        while let Some(frame) = call_stack.last_mut() {
            if frame.w == frame.x {
                let Some(mut frame) = call_stack.pop() else {
                    break;
                };

                let mut a = std::mem::take(&mut frame.ar);
                a.push_back(self.reversal(frame.back_into_w0));
                a.append(&mut frame.al);

                match call_stack.last_mut() {
                    Some(caller) => {
                        let same_side = self.alpha[frame.arc as usize] == Some(caller.side);
                        caller.attach(same_side, frame.t, a);
                    }
                    None => {
                        // the only dart left is the back arc closing the cycle at the root
                        debug_assert_eq!(a.len(), 1);
                        let mut t = frame.t;
                        t.extend(a.pop_front());
                        number(t);
                    }
                }
                continue;
            }

            if let Some(&e) = tree.out_arcs(frame.w).get(frame.next_arc) {
                frame.next_arc += 1;

                let same_side = self.alpha[e as usize] == Some(frame.side);
                if tree.arc(e).is_tree_arc {
                    let side = if same_side { Side::Left } else { Side::Right };
                    let callee = self.embed_frame(e, side);
                    call_stack.push(callee);
                } else {
                    frame.attach(
                        same_side,
                        LinkedList::from([e]),
                        LinkedList::from([self.reversal(e)]),
                    );
                }
                continue;
            }

            // the rotation of `w` is complete
            let w = frame.w;
            let Some(parent) = tree.parent_of(w) else {
                unreachable!("spine nodes are proper descendants of the spine start");
            };

            let mut t = std::mem::take(&mut frame.t);
            t.push_back(self.reversal(tree_into[w as usize]));
            number(t);

            while let Some(&d) = frame.al.back() {
                if self.dart_source(d) != parent {
                    break;
                }
                frame.al.pop_back();
                frame.t.push_front(d);
            }
            frame.t.push_back(tree_into[w as usize]);
            while let Some(&d) = frame.ar.front() {
                if self.dart_source(d) != parent {
                    break;
                }
                frame.ar.pop_front();
                frame.t.push_back(d);
            }

            frame.w = parent;
            frame.next_arc = 1;
        }

        debug_assert!(sort_num.iter().all(|&x| x != u32::MAX));
        sort_num
    }

    /// Reads off the rotation of every node as `(edge, neighbor)` pairs
    fn rotations(&self, root_arc: ArcId) -> LocalRotations {
        let sort_num = self.sort_numbers(root_arc);

        let mut darts_by_number = vec![0 as Dart; sort_num.len()];
        for (d, &num) in sort_num.iter().enumerate() {
            darts_by_number[num as usize] = d as Dart;
        }

        let m = self.tree.number_of_arcs();
        let mut rotations = vec![Vec::new(); self.tree.number_of_nodes() as usize];
        for d in darts_by_number {
            let arc = self.tree.arc(if d < m { d } else { d - m });
            let (source, target) = if d < m {
                (arc.source, arc.target)
            } else {
                (arc.target, arc.source)
            };
            rotations[source as usize].push((arc.edge, target));
        }

        rotations
    }
}

/// Places the segment starting with `arc` into the block stack; returns *false* if the
/// segment conflicts with both sides of an existing block
fn push_segment(blocks: &mut Vec<Block>, arc: ArcId, attachments: LinkedList<Node>) -> bool {
    let mut block = Block::new(arc, attachments);

    loop {
        if block.left_interlaces(blocks.last()) {
            if let Some(top) = blocks.last_mut() {
                top.flip();
            }
        }
        if block.left_interlaces(blocks.last()) {
            return false;
        }

        if !block.right_interlaces(blocks.last()) {
            break;
        }
        if let Some(top) = blocks.pop() {
            block.combine(top);
        }
    }

    blocks.push(block);
    true
}

/// Hopcroft–Tarjan test of a biconnected working graph with at least three nodes
pub(super) fn test_component(graph: &WorkingGraph, embed: bool) -> TestOutcome {
    let mut tree = PalmTree::new(graph, 0);
    sort_arcs_by_cost(&mut tree);

    let Some(root_arc) = tree.first_out_arc(tree.root()) else {
        return TestOutcome::Planar(embed.then(|| vec![Vec::new(); tree.number_of_nodes() as usize]));
    };

    let mut tester = PathAddition::new(&tree);
    tester.alpha[root_arc as usize] = Some(Side::Left);
    if !tester.strongly_planar(root_arc) {
        return TestOutcome::NotPlanar;
    }

    TestOutcome::Planar(embed.then(|| tester.rotations(root_arc)))
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::{super::augment::*, *};

    fn biconnected_working_graph(n: NumNodes, edges: impl IntoIterator<Item = Edge>) -> WorkingGraph {
        let graph = AdjArrayUndir::from_edges(n, edges);
        let nodes = (0..n).collect_vec();
        let mut local_id = vec![INVALID_NODE; n as usize];
        let mut working = WorkingGraph::from_component(&graph, &nodes, &mut local_id);
        make_biconnected(&mut working);
        working
    }

    fn clique(n: Node) -> Vec<Edge> {
        (0..n).tuple_combinations().map(|(u, v)| Edge(u, v)).collect()
    }

    #[test]
    fn block_interlacing() {
        let mut blocks = Vec::new();
        assert!(push_segment(&mut blocks, 0, LinkedList::from([5, 1])));
        // attaches between 1 and 5 -> flips the first block to the right
        assert!(push_segment(&mut blocks, 1, LinkedList::from([3])));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].ratt.iter().copied().collect_vec(), vec![5, 1]);
        assert_eq!(blocks[0].latt.iter().copied().collect_vec(), vec![3]);

        // interlaces with both sides
        assert!(!push_segment(&mut blocks, 2, LinkedList::from([4, 2])));
    }

    #[test]
    fn verdicts() {
        assert!(matches!(
            test_component(&biconnected_working_graph(4, clique(4)), false),
            TestOutcome::Planar(None)
        ));
        assert!(matches!(
            test_component(&biconnected_working_graph(5, clique(5)), false),
            TestOutcome::NotPlanar
        ));

        let k33 = (0..3).cartesian_product(3..6).map(|(u, v)| Edge(u, v));
        assert!(matches!(
            test_component(&biconnected_working_graph(6, k33), true),
            TestOutcome::NotPlanar
        ));
    }

    #[test]
    fn rotations_cover_all_darts() {
        let graph = biconnected_working_graph(4, clique(4));
        let TestOutcome::Planar(Some(rotations)) = test_component(&graph, true) else {
            panic!("K4 is planar");
        };

        for (u, rotation) in rotations.iter().enumerate() {
            assert_eq!(rotation.len(), 3);
            assert_eq!(
                rotation.iter().map(|&(_, v)| v).sorted().collect_vec(),
                (0..4).filter(|&v| v != u as Node).collect_vec()
            );
        }
    }
}
