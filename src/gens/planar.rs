use super::*;

/// Generator for random *stacked triangulations*: maximal planar graphs with `3n - 6` edges
/// (for `n >= 3`) built by repeatedly inserting a fresh node into a uniformly chosen
/// triangular face and connecting it to the three corners of that face.
///
/// For `n < 3` the generator emits a path over all nodes.
#[derive(Debug, Copy, Clone, Default)]
pub struct Triangulation {
    n: NumNodes,
}

impl Triangulation {
    /// Creates a new generator without any nodes
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Triangulation {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Triangulation {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let n = self.n;
        let mut edges = Vec::with_capacity((3 * n as usize).saturating_sub(6).max(1));

        if n < 3 {
            edges.extend((1..n).map(|u| Edge(u - 1, u)));
            return edges.into_iter();
        }

        edges.extend([Edge(0, 1), Edge(1, 2), Edge(0, 2)]);

        // inner and outer face of the initial triangle
        let mut faces: Vec<[Node; 3]> = vec![[0, 1, 2], [0, 1, 2]];
        for v in 3..n {
            let idx = rng.random_range(0..faces.len());
            let [a, b, c] = faces[idx];

            edges.extend([Edge(a, v), Edge(b, v), Edge(c, v)]);
            faces[idx] = [a, b, v];
            faces.push([b, c, v]);
            faces.push([c, a, v]);
        }

        edges.into_iter()
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::Traversal;

    #[test]
    fn number_of_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for n in 0..50 {
            let graph = AdjArrayUndir::triangulation(rng, n);
            let expected = if n < 3 { n.saturating_sub(1) } else { 3 * n - 6 };
            assert_eq!(graph.number_of_edges(), expected);
        }
    }

    #[test]
    fn minimum_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let graph = AdjArrayUndir::triangulation(rng, 200);
        assert!(graph.degrees().all(|d| d >= 3));
        assert!(graph.is_connected());
    }
}
