/*!
# Substructure Generators

Utility methods to insert well-known motifs (paths, cycles, cliques, bicliques) into an
already existing graph, and to subdivide edge lists. These are the building blocks of
Kuratowski-style test instances.

# Example

```rust
use planarity::{prelude::*, gens::*};

let mut g = AdjArrayUndir::new(6);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique(&[0, 4, 5], false);

assert_eq!(
    g.ordered_edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 4), Edge(0, 5), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 5)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional substructures inside an already existing graph.
///
/// All methods insert edges via [`GraphEdgeEditing::add_edge`] and therefore panic if one of
/// the inserted edges already exists.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a simple path.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a cycle: consecutive nodes are adjacent and the last
    /// node is connected back to the first. Fewer than three nodes degrade to a path.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes pairwise. Adds self-loops if `with_loops` is set.
    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool);

    /// Connects every node of `left` to every node of `right`.
    /// ** Panics if both sides share a node **
    fn connect_biclique(&mut self, left: &[Node], right: &[Node]);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        self.connect_path(nodes.iter().copied());

        if nodes.len() > 2 {
            self.add_edge(nodes[nodes.len() - 1], nodes[0]);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool) {
        for (i, &u) in nodes.iter().enumerate() {
            if with_loops {
                self.add_edge(u, u);
            }
            for &v in &nodes[i + 1..] {
                self.add_edge(u, v);
            }
        }
    }

    fn connect_biclique(&mut self, left: &[Node], right: &[Node]) {
        for &u in left {
            for &v in right {
                assert_ne!(u, v);
                self.add_edge(u, v);
            }
        }
    }
}

/// Replaces every edge by a path with `times` fresh internal nodes. Fresh nodes are numbered
/// consecutively starting at `n`. Returns the new number of nodes and the subdivided edges.
///
/// # Example
/// ```rust
/// use planarity::{prelude::*, gens::*};
///
/// let (n, edges) = subdivide_edges(2, [Edge(0, 1)], 2);
/// assert_eq!(n, 4);
/// assert_eq!(edges, vec![Edge(0, 2), Edge(2, 3), Edge(3, 1)]);
/// ```
pub fn subdivide_edges<I>(n: NumNodes, edges: I, times: NumNodes) -> (NumNodes, Vec<Edge>)
where
    I: IntoIterator<Item = Edge>,
{
    let mut next = n;
    let mut result = Vec::new();

    for Edge(u, v) in edges {
        let inner = next..next + times;
        next += times;
        result.extend(
            std::iter::once(u)
                .chain(inner)
                .chain(std::iter::once(v))
                .tuple_windows()
                .map(|(a, b)| Edge(a, b)),
        );
    }

    (next, result)
}
