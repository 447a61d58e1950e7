/*!
# Planarity Testing

A graph is *planar* if it can be drawn in the plane without crossing edges. This module
provides two independent recognizers that decide planarity in (near) linear time and can
produce a combinatorial embedding ([`Embedding`]) of planar graphs:

- [`HopcroftTarjan`]: path addition in the formulation of Mehlhorn and Mutzel,
- [`BoyerMyrvold`]: edge addition on a forest of biconnected components.

Both implement [`PlanarityRecognizer`] and always agree on the verdict.
Each connected component is tested on its own: it is copied into a private working graph
(self-loops and repeated adjacencies are dropped), augmented to be biconnected by auxiliary
edges and then handed to the tester. Auxiliary edges never appear in a reported embedding.

For most use-cases the [`Planarity`] trait, which is implemented on every undirected graph,
suffices:

```
use planarity::{prelude::*, algo::*, gens::*};

let mut graph = AdjArrayUndir::new(6);
graph.connect_biclique(&[0, 1, 2], &[3, 4, 5]);
assert!(!graph.is_planar());

graph.remove_edge(2, 5);
let embedding = graph.planar_embedding().unwrap();
assert!(embedding.is_planar_embedding());
```
*/

mod augment;
mod boyer_myrvold;
mod component;
mod embedding;
mod hopcroft_tarjan;
mod palm_tree;
mod reorder;

use thiserror::Error;
use tracing::{debug, trace};

use super::*;
use component::{EdgeId, WorkingGraph};

pub use embedding::Embedding;

/// Verdict of a finished planarity test
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlanarityState {
    Planar,
    NotPlanar,
}

impl PlanarityState {
    pub fn is_planar(self) -> bool {
        self == PlanarityState::Planar
    }
}

/// Usage errors of a [`PlanarityRecognizer`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("the planarity test has already been run")]
    AlreadyRun,
    #[error("the planarity test has not finished; call `run` first")]
    NotFinished,
}

/// Selects the recognizer used by [`Planarity`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlanarityAlgorithm {
    #[default]
    HopcroftTarjan,
    BoyerMyrvold,
}

/// A recognizer is bound to one graph, runs exactly once and afterwards answers queries
/// about the result.
pub trait PlanarityRecognizer {
    /// Runs the test.
    /// Fails with [`RecognitionError::AlreadyRun`] on every call but the first.
    fn try_run(&mut self) -> Result<PlanarityState, RecognitionError>;

    /// Returns the verdict of the finished test.
    /// Fails with [`RecognitionError::NotFinished`] before [`PlanarityRecognizer::try_run`].
    fn try_is_planar(&self) -> Result<PlanarityState, RecognitionError>;

    /// Returns the embedding of the finished test; `None` if the graph is not planar or
    /// no embedding was requested.
    /// Fails with [`RecognitionError::NotFinished`] before [`PlanarityRecognizer::try_run`].
    fn try_embedding(&self) -> Result<Option<&Embedding>, RecognitionError>;

    /// Runs the test and returns its verdict
    /// ** Panics if the test has already been run **
    fn run(&mut self) -> PlanarityState {
        self.try_run().unwrap_or_else(|e| panic!("{e}"))
    }

    /// ** Panics if the test has not been run yet **
    fn is_planar(&self) -> PlanarityState {
        self.try_is_planar().unwrap_or_else(|e| panic!("{e}"))
    }

    /// ** Panics if the test has not been run yet **
    fn embedding(&self) -> Option<&Embedding> {
        self.try_embedding().unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Rotations of a working graph: for every local node its `(edge, neighbor)` pairs in order
type LocalRotations = Vec<Vec<(EdgeId, Node)>>;

/// Result of testing one biconnected working graph
enum TestOutcome {
    NotPlanar,
    /// Contains rotations if they were requested
    Planar(Option<LocalRotations>),
}

/// Tests a biconnected working graph with at least three nodes
type ComponentTester = fn(&WorkingGraph, bool) -> TestOutcome;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum RunState {
    Unrun,
    Running,
    Finished(PlanarityState),
}

/// Lifecycle shared by all recognizers
#[derive(Debug)]
struct Recognition<'a, G> {
    graph: &'a G,
    embedding_requested: bool,
    state: RunState,
    embedding: Option<Embedding>,
}

impl<'a, G> Recognition<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn new(graph: &'a G, embedding_requested: bool) -> Self {
        Self {
            graph,
            embedding_requested,
            state: RunState::Unrun,
            embedding: None,
        }
    }

    fn set_embedding_requested(&mut self, requested: bool) {
        assert_eq!(
            self.state,
            RunState::Unrun,
            "the embedding mode cannot be changed after the test was run"
        );
        self.embedding_requested = requested;
    }

    fn try_run(&mut self, tester: ComponentTester, name: &str) -> Result<PlanarityState, RecognitionError> {
        if self.state != RunState::Unrun {
            return Err(RecognitionError::AlreadyRun);
        }
        self.state = RunState::Running;

        let (verdict, embedding) = recognize(self.graph, self.embedding_requested, tester, name);
        self.embedding = embedding;
        self.state = RunState::Finished(verdict);

        Ok(verdict)
    }

    fn try_is_planar(&self) -> Result<PlanarityState, RecognitionError> {
        match self.state {
            RunState::Finished(verdict) => Ok(verdict),
            _ => Err(RecognitionError::NotFinished),
        }
    }

    fn try_embedding(&self) -> Result<Option<&Embedding>, RecognitionError> {
        self.try_is_planar().map(|_| self.embedding.as_ref())
    }
}

/// Tests every connected component of `graph` and assembles the embedding
fn recognize<G>(
    graph: &G,
    embed: bool,
    tester: ComponentTester,
    name: &str,
) -> (PlanarityState, Option<Embedding>)
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    let mut rotations = if embed { vec![Vec::new(); graph.len()] } else { Vec::new() };
    let mut local_id = vec![INVALID_NODE; graph.len()];

    for (idx, nodes) in graph.connected_components().enumerate() {
        let mut working = WorkingGraph::from_component(graph, &nodes, &mut local_id);
        let n = working.number_of_nodes();
        let m = working.number_of_original_edges();

        if n <= 2 {
            if embed {
                working.write_rotations(
                    (0..n).map(|u| {
                        let darts = working
                            .incident_edges(u)
                            .iter()
                            .map(|&e| (e, working.opposite(e, u)))
                            .collect();
                        (u, darts)
                    }),
                    &mut rotations,
                );
            }
            continue;
        }

        if m > 3 * n - 6 {
            debug!(algorithm = name, component = idx, nodes = n, edges = m, "too many edges to be planar");
            return (PlanarityState::NotPlanar, None);
        }

        let num_auxiliary = augment::make_biconnected(&mut working);
        trace!(component = idx, auxiliary_edges = num_auxiliary, "augmented to biconnected graph");

        match tester(&working, embed) {
            TestOutcome::NotPlanar => {
                debug!(algorithm = name, component = idx, nodes = n, edges = m, "component is not planar");
                return (PlanarityState::NotPlanar, None);
            }
            TestOutcome::Planar(local) => {
                debug!(algorithm = name, component = idx, nodes = n, edges = m, "component is planar");
                if let Some(local) = local {
                    working.write_rotations(
                        local.into_iter().enumerate().map(|(u, darts)| (u as Node, darts)),
                        &mut rotations,
                    );
                }
            }
        }
    }

    (
        PlanarityState::Planar,
        embed.then(|| Embedding::from_rotations(rotations)),
    )
}

/// Declares a public recognizer wrapping [`Recognition`] with a fixed tester
macro_rules! planarity_recognizer {
    ($(#[$doc:meta])* $name:ident, $tester:path) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name<'a, G> {
            inner: Recognition<'a, G>,
        }

        impl<'a, G> $name<'a, G>
        where
            G: AdjacencyList + GraphType<Dir = Undirected>,
        {
            /// Binds a new recognizer to `graph`
            pub fn new(graph: &'a G, embedding_requested: bool) -> Self {
                Self {
                    inner: Recognition::new(graph, embedding_requested),
                }
            }

            /// Updates whether an embedding is computed
            /// ** Panics if the test has already been run **
            pub fn set_embedding_requested(&mut self, requested: bool) {
                self.inner.set_embedding_requested(requested);
            }

            /// Builder variant of `set_embedding_requested`
            pub fn embedding_requested(mut self, requested: bool) -> Self {
                self.set_embedding_requested(requested);
                self
            }

            /// Returns *true* if an embedding will be (or was) computed
            pub fn is_embedding_requested(&self) -> bool {
                self.inner.embedding_requested
            }

            /// Moves the embedding out of a finished recognizer
            /// ** Panics if the test has not been run yet **
            pub fn into_embedding(self) -> Option<Embedding> {
                if let Err(e) = self.inner.try_is_planar() {
                    panic!("{e}");
                }
                self.inner.embedding
            }
        }

        impl<G> PlanarityRecognizer for $name<'_, G>
        where
            G: AdjacencyList + GraphType<Dir = Undirected>,
        {
            fn try_run(&mut self) -> Result<PlanarityState, RecognitionError> {
                self.inner.try_run($tester, stringify!($name))
            }

            fn try_is_planar(&self) -> Result<PlanarityState, RecognitionError> {
                self.inner.try_is_planar()
            }

            fn try_embedding(&self) -> Result<Option<&Embedding>, RecognitionError> {
                self.inner.try_embedding()
            }
        }
    };
}

planarity_recognizer!(
    /// Planarity test by path addition (Hopcroft and Tarjan).
    ///
    /// # Examples
    /// ```
    /// use planarity::{prelude::*, algo::*, gens::*};
    ///
    /// let mut graph = AdjArrayUndir::new(4);
    /// graph.connect_clique(&[0, 1, 2, 3], false);
    ///
    /// let mut recognizer = HopcroftTarjan::new(&graph, true);
    /// assert_eq!(recognizer.run(), PlanarityState::Planar);
    /// assert_eq!(recognizer.embedding().unwrap().number_of_faces(), 4);
    /// ```
    HopcroftTarjan,
    hopcroft_tarjan::test_component
);

planarity_recognizer!(
    /// Planarity test by edge addition (Boyer and Myrvold).
    ///
    /// # Examples
    /// ```
    /// use planarity::{prelude::*, algo::*, gens::*};
    ///
    /// let mut graph = AdjArrayUndir::new(5);
    /// graph.connect_clique(&[0, 1, 2, 3, 4], false);
    ///
    /// let mut recognizer = BoyerMyrvold::new(&graph, true);
    /// recognizer.run();
    /// assert_eq!(recognizer.is_planar(), PlanarityState::NotPlanar);
    /// assert!(recognizer.embedding().is_none());
    /// ```
    BoyerMyrvold,
    boyer_myrvold::test_component
);

/// Planarity tests exposed as methods on undirected graphs
pub trait Planarity: AdjacencyList + GraphType<Dir = Undirected> + Sized {
    /// Returns *true* if the graph is planar (using [`HopcroftTarjan`])
    fn is_planar(&self) -> bool {
        self.is_planar_with(PlanarityAlgorithm::default())
    }

    /// Returns *true* if the graph is planar using the chosen algorithm
    fn is_planar_with(&self, algorithm: PlanarityAlgorithm) -> bool {
        match algorithm {
            PlanarityAlgorithm::HopcroftTarjan => HopcroftTarjan::new(self, false).run(),
            PlanarityAlgorithm::BoyerMyrvold => BoyerMyrvold::new(self, false).run(),
        }
        .is_planar()
    }

    /// Returns a planar embedding if the graph is planar (using [`HopcroftTarjan`])
    fn planar_embedding(&self) -> Option<Embedding> {
        self.planar_embedding_with(PlanarityAlgorithm::default())
    }

    /// Returns a planar embedding if the graph is planar using the chosen algorithm
    fn planar_embedding_with(&self, algorithm: PlanarityAlgorithm) -> Option<Embedding> {
        match algorithm {
            PlanarityAlgorithm::HopcroftTarjan => {
                let mut recognizer = HopcroftTarjan::new(self, true);
                recognizer.run();
                recognizer.into_embedding()
            }
            PlanarityAlgorithm::BoyerMyrvold => {
                let mut recognizer = BoyerMyrvold::new(self, true);
                recognizer.run();
                recognizer.into_embedding()
            }
        }
    }
}

impl<G> Planarity for G where G: AdjacencyList + GraphType<Dir = Undirected> {}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    const ALGORITHMS: [PlanarityAlgorithm; 2] =
        [PlanarityAlgorithm::HopcroftTarjan, PlanarityAlgorithm::BoyerMyrvold];

    /// Runs both recognizers, checks that they agree and validates returned embeddings
    fn verdict<G>(graph: &G) -> bool
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
    {
        let expected_edges = graph
            .edges(true)
            .filter(|e| !e.is_loop())
            .sorted()
            .collect_vec();

        let verdicts = ALGORITHMS.map(|algo| {
            let planar = graph.is_planar_with(algo);
            let embedding = graph.planar_embedding_with(algo);
            assert_eq!(planar, embedding.is_some(), "{algo:?}");

            if let Some(embedding) = embedding {
                assert!(embedding.is_planar_embedding(), "{algo:?}");
                assert_eq!(embedding.number_of_nodes(), graph.number_of_nodes());
                assert_eq!(
                    embedding.edges(true).sorted().collect_vec(),
                    expected_edges,
                    "{algo:?}"
                );
            }
            planar
        });

        assert_eq!(verdicts[0], verdicts[1], "recognizers disagree");
        verdicts[0]
    }

    fn complete_graph(n: NumNodes) -> AdjArrayUndir {
        let mut graph = AdjArrayUndir::new(n);
        graph.connect_clique(&(0..n).collect_vec(), false);
        graph
    }

    fn complete_bipartite(a: NumNodes, b: NumNodes) -> AdjArrayUndir {
        let mut graph = AdjArrayUndir::new(a + b);
        graph.connect_biclique(&(0..a).collect_vec(), &(a..a + b).collect_vec());
        graph
    }

    fn petersen() -> AdjArrayUndir {
        let mut graph = AdjArrayUndir::new(10);
        graph.connect_cycle(0..5);
        for i in 0..5 {
            graph.add_edge(i, i + 5);
            graph.add_edge(5 + i, 5 + (i + 2) % 5);
        }
        graph
    }

    /// All graphs on the pairs of `n` nodes, one per subset of pairs
    fn all_graphs(n: NumNodes) -> impl Iterator<Item = AdjArrayUndir> {
        let pairs = (0..n).tuple_combinations().map(|(u, v)| Edge(u, v)).collect_vec();
        (0u64..(1 << pairs.len())).map(move |mask| {
            AdjArrayUndir::from_edges(
                n,
                pairs
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| (mask >> i) & 1 == 1)
                    .map(|(_, e)| *e),
            )
        })
    }

    #[test]
    fn trivial_graphs() {
        for n in 0..3 {
            assert!(verdict(&AdjArrayUndir::new(n)));
            assert!(verdict(&complete_graph(n)));
        }

        let embedding = AdjArrayUndir::new(0).planar_embedding().unwrap();
        assert_eq!(embedding.number_of_nodes(), 0);
        assert_eq!(embedding.number_of_faces(), 0);

        let embedding = AdjArrayUndir::new(1).planar_embedding().unwrap();
        assert_eq!(embedding.number_of_faces(), 1);
    }

    #[test]
    fn small_graphs_are_planar() {
        for n in 0..=4 {
            for graph in all_graphs(n) {
                assert!(verdict(&graph), "{:?}", graph.edges(true).collect_vec());
            }
        }
    }

    #[test]
    fn five_nodes_only_complete_graph() {
        for graph in all_graphs(5) {
            assert_eq!(verdict(&graph), graph.number_of_edges() < 10);
        }
    }

    #[test]
    fn six_nodes_agree() {
        let mut non_planar = 0;
        for graph in all_graphs(6) {
            non_planar += !verdict(&graph) as usize;
        }
        // 2^15 labelled graphs; non-planar ones contain a K5 or K3,3 subdivision
        assert!(non_planar > 0);
    }

    #[test]
    fn kuratowski_graphs() {
        assert!(!verdict(&complete_graph(5)));
        assert!(!verdict(&complete_graph(6)));
        assert!(!verdict(&complete_bipartite(3, 3)));
        assert!(!verdict(&petersen()));

        assert!(verdict(&complete_bipartite(2, 10)));
        assert!(verdict(&complete_graph(4)));

        let mut graph = complete_graph(5);
        graph.remove_edge(1, 3);
        assert!(verdict(&graph));

        let mut graph = complete_bipartite(3, 3);
        graph.remove_edge(0, 4);
        assert!(verdict(&graph));
    }

    #[test]
    fn kuratowski_subdivisions() {
        for times in 1..4 {
            let k5 = complete_graph(5);
            let (n, edges) = subdivide_edges(5, k5.edges(true), times);
            assert!(!verdict(&AdjArrayUndir::from_edges(n, edges)));

            let k33 = complete_bipartite(3, 3);
            let (n, edges) = subdivide_edges(6, k33.edges(true), times);
            let graph = SparseAdjArrayUndir::from_edges(n, edges);
            assert!(!verdict(&graph));
        }
    }

    #[test]
    fn faces_of_embeddings() {
        let mut cycle = AdjArrayUndir::new(6);
        cycle.connect_cycle(0..6);

        for algo in ALGORITHMS {
            let embedding = cycle.planar_embedding_with(algo).unwrap();
            let faces = embedding.faces();
            assert_eq!(faces.len(), 2);
            assert!(faces.iter().all(|f| f.len() == 6));

            let embedding = complete_graph(4).planar_embedding_with(algo).unwrap();
            assert_eq!(embedding.number_of_faces(), 4);
            assert!(embedding.faces().iter().all(|f| f.len() == 3));
        }
    }

    #[test]
    fn disconnected_graphs() {
        // C6, K4 and an isolated node
        let mut graph = AdjArrayUndir::new(11);
        graph.connect_cycle(0..6);
        graph.connect_clique(&[6, 7, 8, 9], false);
        assert!(verdict(&graph));

        for algo in ALGORITHMS {
            let embedding = graph.planar_embedding_with(algo).unwrap();
            assert_eq!(embedding.number_of_faces(), 2 + 4 + 1);
            assert_eq!(embedding.euler_characteristics(), vec![2, 2, 2]);
        }

        // a single non-planar component suffices
        graph.connect_biclique(&[10], &[6, 7, 8, 9]);
        assert!(!verdict(&graph));
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut graph = complete_graph(4);
        graph.add_edge(0, 0);
        graph.add_edge(3, 3);
        assert!(verdict(&graph));

        let embedding = graph.planar_embedding().unwrap();
        assert_eq!(embedding.number_of_edges(), 6);
        assert!(!embedding.has_edge(0, 0));

        let mut graph = complete_graph(5);
        graph.add_edge(2, 2);
        assert!(!verdict(&graph));
    }

    #[test]
    fn random_gnp() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);
        let mut planar = 0;
        for _ in 0..300 {
            let n = rng.random_range(5..40);
            let d = rng.random_range(1.5..4.5);
            let graph = AdjArrayUndir::from_edges(n, Gnp::new().nodes(n).avg_deg(d).stream(rng));
            planar += verdict(&graph) as usize;
        }
        // both outcomes are exercised
        assert!(planar > 0 && planar < 300, "{planar}");
    }

    #[test]
    fn random_triangulations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xfeed);
        for _ in 0..50 {
            let n = rng.random_range(4..80);
            let mut graph = SparseAdjArrayUndir::triangulation(rng, n);
            assert!(verdict(&graph));

            for algo in ALGORITHMS {
                let embedding = graph.planar_embedding_with(algo).unwrap();
                assert_eq!(embedding.number_of_faces(), 2 * n as usize - 4);
            }

            // any additional edge destroys planarity of a maximal planar graph
            let (u, v) = loop {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u != v && !graph.has_edge(u, v) {
                    break (u, v);
                }
            };
            graph.add_edge(u, v);
            assert!(!verdict(&graph));

            // removing a few edges keeps it planar
            graph.remove_edge(u, v);
            let edges = graph.edges(true).collect_vec();
            for _ in 0..n / 3 {
                let Edge(a, b) = edges[rng.random_range(0..edges.len())];
                graph.try_remove_edge(a, b);
            }
            assert!(verdict(&graph));
        }
    }

    #[test]
    fn deep_graphs() {
        let n = 100_000;
        let mut path = AdjArrayUndir::new(n);
        path.connect_path(0..n);
        assert!(verdict(&path));

        let mut cycle = AdjArrayUndir::new(n);
        cycle.connect_cycle(0..n);
        assert!(verdict(&cycle));

        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let graph = AdjArrayUndir::triangulation(rng, 20_000);
        assert!(verdict(&graph));
    }

    #[test]
    fn wide_graphs() {
        // fan: a hub adjacent to every node of a long path
        let n = 100_000;
        let mut fan = AdjArrayUndir::new(n);
        fan.connect_path(1..n);
        fan.connect_biclique(&[0], &(1..n).collect_vec());
        assert!(verdict(&fan));

        // ladder: two long paths joined by rungs
        let half = 50_000;
        let mut ladder = AdjArrayUndir::new(2 * half);
        ladder.connect_path(0..half);
        ladder.connect_path(half..2 * half);
        for u in 0..half {
            ladder.add_edge(u, u + half);
        }
        assert!(verdict(&ladder));

        // a wheel only has its rim face left for chords; two interleaving chords cross
        fan.add_edge(1, n - 1);
        fan.add_edge(2, n / 2);
        assert!(verdict(&fan));
        fan.add_edge(3, n / 2 + 10);
        assert!(!verdict(&fan));
    }

    #[test]
    fn recognizer_lifecycle() {
        let graph = complete_graph(4);

        let mut recognizer = BoyerMyrvold::new(&graph, false);
        assert!(!recognizer.is_embedding_requested());
        assert_eq!(recognizer.try_is_planar(), Err(RecognitionError::NotFinished));
        assert_eq!(recognizer.try_embedding(), Err(RecognitionError::NotFinished));

        recognizer.set_embedding_requested(true);
        assert_eq!(recognizer.try_run(), Ok(PlanarityState::Planar));
        assert_eq!(recognizer.try_run(), Err(RecognitionError::AlreadyRun));
        assert!(recognizer.is_planar().is_planar());
        assert_eq!(recognizer.embedding().unwrap().number_of_edges(), 6);

        let mut recognizer = HopcroftTarjan::new(&graph, true).embedding_requested(false);
        assert_eq!(recognizer.run(), PlanarityState::Planar);
        assert!(recognizer.embedding().is_none());
        assert!(recognizer.into_embedding().is_none());

        let k5 = complete_graph(5);
        let mut recognizer = HopcroftTarjan::new(&k5, true);
        assert_eq!(recognizer.run(), PlanarityState::NotPlanar);
        assert_eq!(recognizer.try_embedding(), Ok(None));
    }

    #[test]
    #[should_panic]
    fn second_run() {
        let graph = complete_graph(3);
        let mut recognizer = HopcroftTarjan::new(&graph, false);
        recognizer.run();
        recognizer.run();
    }

    #[test]
    #[should_panic]
    fn query_before_run() {
        let graph = complete_graph(3);
        BoyerMyrvold::new(&graph, false).is_planar();
    }

    #[test]
    #[should_panic]
    fn embedding_before_run() {
        let graph = complete_graph(3);
        HopcroftTarjan::new(&graph, true).into_embedding();
    }

    #[test]
    #[should_panic]
    fn change_mode_after_run() {
        let graph = complete_graph(3);
        let mut recognizer = BoyerMyrvold::new(&graph, false);
        recognizer.run();
        recognizer.set_embedding_requested(true);
    }
}
