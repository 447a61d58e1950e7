use std::fmt::Debug;

use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible edge between two distinct nodes independently
/// with probability `p`. Emitted edges are normalized and free of self-loops.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `prob` is not a valid probability **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.p = GnpType::Prob(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let n = self.n as u64;
        let p = match self.p {
            GnpType::NotSet => panic!("Probility of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = d / (n.max(2) - 1) as f64;
                assert!(
                    p.is_valid_probility(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        };

        // pair `(u, v)` with `u < v` is identified with `u * n + v`; other indices are skipped
        GeometricJumper::new(p)
            .stop_at(n * n)
            .iter(rng)
            .map(move |x| Edge((x / n) as Node, (x % n) as Node))
            .filter(|e| e.0 < e.1)
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn edges_are_simple() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);
        let edges = Gnp::new().nodes(50).prob(0.3).generate(rng);

        assert!(edges.iter().all(|e| e.0 < e.1 && e.1 < 50));
        assert!(edges.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);
        assert_eq!(Gnp::new().nodes(10).prob(0.0).generate(rng).len(), 0);
        assert_eq!(Gnp::new().nodes(10).prob(1.0).generate(rng).len(), 45);

        let graph = AdjArrayUndir::gnp(rng, 10, 1.0);
        assert_eq!(graph.number_of_edges(), 45);
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(14);
        let n = 1000;
        let m: usize = (0..10)
            .map(|_| Gnp::new().nodes(n).avg_deg(4.0).stream(rng).count())
            .sum();

        // expected: 10 * n * d / 2 = 20000
        assert!((18_000..22_000).contains(&m), "{m}");
    }

    #[test]
    #[should_panic]
    fn missing_probability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(15);
        Gnp::new().nodes(10).generate(rng);
    }
}
