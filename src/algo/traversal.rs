/*!
Graph traversals.

[`TraversalSearch`] is a lazy iterator over the nodes reachable from a start node. The frontier
type decides the order; a queue gives a **BFS**. Connected components are built on top of it.
The planarity tests need DFS numbers and low-points and run their own palm-tree search.
The [`Traversal`] trait exposes the search directly as methods on graphs.
*/

use super::*;
use std::collections::VecDeque;

/// Frontier of a traversal: nodes that have been discovered but not yet emitted.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
pub trait NodeSequencer {
    /// Creates a new sequencer containing a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of nodes currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator; see module documentation.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    /// All nodes below are visited
    restart_from: Node,
}

/// A BFS traversal iterator visiting nodes in breadth-first order.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal starting at `start`
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
            restart_from: 0,
        }
    }

    /// Tries to restart the search at a yet unvisited node and returns
    /// true iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.visited.first_cleared_from(self.restart_from) {
            None => false,
            Some(x) => {
                self.restart_from = x + 1;
                self.visited.set_bit(x);
                self.sequencer.push(x);
                true
            }
        }
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        let u = self.sequencer.pop()?;
        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(v);
            }
        }
        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.sequencer.cardinality()),
        )
    }
}

/// Traversals exposed as methods on graphs.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a BFS iterator starting at `start`
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use planarity::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (0, 3)]);
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order.len(), 4);
    /// assert_eq!(order[0], 0);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns *true* if every node can be reached from node `0`.
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool {
        self.is_empty() || self.bfs(0).count() == self.len()
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjArrayUndir::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let order = graph.bfs(1).collect_vec();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);
        assert_eq!(order[1..3].iter().copied().sorted().collect_vec(), vec![0, 2]);
        assert_eq!(order[5], 3);
    }

    #[test]
    fn restart_at_unvisited() {
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (3, 4)]);

        let mut bfs = graph.bfs(0);
        assert_eq!(bfs.by_ref().sorted().collect_vec(), vec![0, 1, 2]);

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().sorted().collect_vec(), vec![3, 4]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![5]);
        assert!(!bfs.try_restart_at_unvisited());
    }

    #[test]
    fn connectedness() {
        assert!(AdjArrayUndir::new(0).is_connected());
        assert!(AdjArrayUndir::new(1).is_connected());
        assert!(!AdjArrayUndir::new(2).is_connected());
        assert!(AdjArrayUndir::from_edges(3, [(0, 2), (2, 1)]).is_connected());
    }
}
