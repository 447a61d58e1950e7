/*!
`planarity` decides whether graphs that are
- **unlabelled** : Nodes are numbered `0` to `n - 1`,
- **unweighted** : Neither nodes nor edges have a weight attached to them, and
- **undirected**

can be drawn in the plane without crossings, and optionally computes a combinatorial planar
embedding (a *rotation system*: for each node the cyclic order of its neighbors).

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; `Edge(u, v)` and `Edge(v, u)`
denote the same undirected edge.

See the [`repr`] module for the available storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
- [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir)

The recognizers only talk to graphs through the traits of [`ops`], so any other representation
implementing them works as well.

# Design

Algorithms are provided as configurable structs that one can alter using either the *Builder* /
*Setter* pattern before running them on a provided graph. The most common use-cases are also
available via traits on the graph itself:

```
use planarity::{prelude::*, algo::*, gens::*};

let mut graph = AdjArrayUndir::new(5);
graph.connect_clique(&[0, 1, 2, 3], false);
assert!(graph.is_planar());

graph.connect_biclique(&[4], &[0, 1, 2, 3]);
assert!(!graph.is_planar());
```

Two independent recognizers are available in [`algo`]:
[`HopcroftTarjan`](crate::algo::HopcroftTarjan) (path addition) and
[`BoyerMyrvold`](crate::algo::BoyerMyrvold) (edge addition).

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all graph representations,
- [`algo`] includes traversals, connected components and the planarity recognizers,
- [`gens`] includes random graph generators and deterministic substructures such as paths/cycles/cliques,
- [`utils`] includes helper structs such as [`NodeBitSet`].

In most use-cases, `use planarity::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `planarity::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
