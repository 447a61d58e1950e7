use super::*;

/// Index of an edge in a [`WorkingGraph`]
pub(super) type EdgeId = u32;

/// Auxiliary edges are added by the biconnectivity augmentation and must never
/// surface in a reported embedding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum EdgeKind {
    Original,
    Auxiliary,
}

/// A private, edge-indexed copy of one connected component.
///
/// Nodes are renumbered to `0..k`; `global` maps them back to the input graph.
/// Self-loops are dropped and repeated adjacencies collapse into a single edge.
#[derive(Debug, Clone)]
pub(super) struct WorkingGraph {
    global: Vec<Node>,
    endpoints: Vec<(Node, Node)>,
    kinds: Vec<EdgeKind>,
    incident: Vec<Vec<EdgeId>>,
    num_original: NumEdges,
}

impl WorkingGraph {
    /// Copies the component induced by `nodes` out of `graph`.
    ///
    /// `local_id` is scratch space of length `graph.number_of_nodes()`; only the entries of
    /// `nodes` are written. Passing the same buffer for every component keeps the total work
    /// linear.
    pub(super) fn from_component<G>(graph: &G, nodes: &[Node], local_id: &mut [Node]) -> Self
    where
        G: AdjacencyList,
    {
        for (i, &u) in nodes.iter().enumerate() {
            local_id[u as usize] = i as Node;
        }

        let mut working = Self {
            global: nodes.to_vec(),
            endpoints: Vec::new(),
            kinds: Vec::new(),
            incident: vec![Vec::new(); nodes.len()],
            num_original: 0,
        };

        // `last_seen[v] == u` iff the edge {u, v} has already been added while scanning `u`
        let mut last_seen = vec![INVALID_NODE; nodes.len()];
        for (lu, &u) in nodes.iter().enumerate() {
            let lu = lu as Node;
            for v in graph.neighbors_of(u) {
                let lv = local_id[v as usize];
                debug_assert_eq!(working.global[lv as usize], v);

                if lu >= lv || last_seen[lv as usize] == lu {
                    continue;
                }
                last_seen[lv as usize] = lu;
                working.add_edge(lu, lv, EdgeKind::Original);
            }
        }

        working
    }

    /// Adds the edge `{u, v}` and returns its id
    pub(super) fn add_edge(&mut self, u: Node, v: Node, kind: EdgeKind) -> EdgeId {
        debug_assert_ne!(u, v);
        let id = self.endpoints.len() as EdgeId;
        self.endpoints.push((u, v));
        self.kinds.push(kind);
        self.incident[u as usize].push(id);
        self.incident[v as usize].push(id);
        if kind == EdgeKind::Original {
            self.num_original += 1;
        }
        id
    }

    pub(super) fn number_of_nodes(&self) -> NumNodes {
        self.global.len() as NumNodes
    }

    pub(super) fn number_of_edges(&self) -> NumEdges {
        self.endpoints.len() as NumEdges
    }

    /// Number of edges that stem from the input graph
    pub(super) fn number_of_original_edges(&self) -> NumEdges {
        self.num_original
    }

    pub(super) fn number_of_auxiliary_edges(&self) -> NumEdges {
        self.number_of_edges() - self.num_original
    }

    pub(super) fn incident_edges(&self, u: Node) -> &[EdgeId] {
        &self.incident[u as usize]
    }

    pub(super) fn endpoints(&self, e: EdgeId) -> (Node, Node) {
        self.endpoints[e as usize]
    }

    /// Returns the endpoint of `e` that is not `u`
    pub(super) fn opposite(&self, e: EdgeId, u: Node) -> Node {
        let (a, b) = self.endpoints(e);
        debug_assert!(a == u || b == u);
        if a == u { b } else { a }
    }

    pub(super) fn is_auxiliary(&self, e: EdgeId) -> bool {
        self.kinds[e as usize] == EdgeKind::Auxiliary
    }

    /// Maps a local node back to the input graph
    pub(super) fn global_node(&self, u: Node) -> Node {
        self.global[u as usize]
    }

    /// Translates local rotations (given as `(edge, neighbor)` lists) into rotations of the
    /// input graph, dropping auxiliary edges on the way.
    pub(super) fn write_rotations(
        &self,
        local: impl IntoIterator<Item = (Node, Vec<(EdgeId, Node)>)>,
        rotations: &mut [Vec<Node>],
    ) {
        for (u, darts) in local {
            let rotation = &mut rotations[self.global_node(u) as usize];
            debug_assert!(rotation.is_empty());
            rotation.extend(
                darts
                    .into_iter()
                    .filter(|&(e, _)| !self.is_auxiliary(e))
                    .map(|(_, v)| self.global_node(v)),
            );
        }
    }
}
