/*!
# Graph Generators

This module provides builder-style generators for random graphs and helpers to insert
deterministic substructures into existing graphs. They are mostly used to produce test and
benchmark instances for the planarity recognizers.

The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

Supported models include:
- G(n,p): Erdős–Rényi model with independent edge probability
- Stacked triangulations: random maximal planar graphs

All graph types implementing `GraphFromScratch` can leverage the [`RandomGraph`] trait for
convenient random graph construction.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod planar;
mod substructures;

pub use gnp::*;
pub use planar::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from the random models of this module.
pub trait RandomGraph: Sized {
    /// Creates a random simple `G(n,p)` graph using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a random maximal planar graph with `n` nodes.
    fn triangulation<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).prob(p).stream(rng))
    }

    fn triangulation<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Triangulation::new().nodes(n).stream(rng))
    }
}
