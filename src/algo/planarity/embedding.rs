use bitvec::prelude::*;
use fxhash::FxHashMap;

use super::*;

/// A combinatorial planar embedding (rotation system).
///
/// For every node, [`Embedding::rotation_of`] lists its neighbors in the cyclic order in which
/// the incident edges leave the node in some crossing-free drawing. All rotations share the
/// same orientation, so tracing faces with [`Embedding::faces`] yields the faces of that drawing.
///
/// An `Embedding` is itself an undirected graph and can be used with the traits of
/// [`ops`](crate::ops) and the algorithms of [`algo`](crate::algo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embedding {
    rotations: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl Embedding {
    /// Creates an embedding from explicit rotations.
    /// ** Panics if the rotations are not symmetric, i.e. `v` appears in the rotation of `u`
    /// but not vice versa **
    pub fn from_rotations(rotations: Vec<Vec<Node>>) -> Self {
        let degree_sum: usize = rotations.iter().map(|r| r.len()).sum();
        assert!(degree_sum % 2 == 0, "rotations must be symmetric");

        let embedding = Self {
            num_edges: (degree_sum / 2) as NumEdges,
            rotations,
        };
        debug_assert!(
            embedding
                .vertices()
                .all(|u| embedding.rotation_of(u).iter().all(|&v| embedding.contains_edge(v, u))),
            "rotations must be symmetric"
        );
        embedding
    }

    /// Returns the neighbors of `u` in cyclic order
    /// ** Panics if `u >= n` **
    pub fn rotation_of(&self, u: Node) -> &[Node] {
        &self.rotations[u as usize]
    }

    /// Returns the edges `(u, v)` incident to `u` in cyclic order
    /// ** Panics if `u >= n` **
    pub fn edges_around(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.rotation_of(u).iter().map(move |&v| Edge(u, v))
    }

    /// Returns *true* if the edge `{u, v}` is embedded
    /// ** Panics if `u >= n` **
    pub fn contains_edge(&self, u: Node, v: Node) -> bool {
        self.rotation_of(u).contains(&v)
    }

    /// Consumes the embedding and returns the raw rotations
    pub fn into_rotations(self) -> Vec<Vec<Node>> {
        self.rotations
    }

    /// Traces all faces. Each face is reported as the cyclic sequence of nodes along its boundary;
    /// a node appears multiple times if the boundary passes it several times (e.g. at cut vertices
    /// or bridges). An isolated node forms a face `[u]` on its own.
    ///
    /// The successor of the dart `(u, v)` on its face is `(v, w)` where `w` follows `u` in the
    /// rotation of `v`.
    ///
    /// # Examples
    /// ```
    /// use planarity::{prelude::*, algo::*, gens::*};
    ///
    /// let mut graph = AdjArrayUndir::new(6);
    /// graph.connect_cycle(0..6);
    ///
    /// let embedding = graph.planar_embedding().unwrap();
    /// let faces = embedding.faces();
    /// assert_eq!(faces.len(), 2);
    /// assert!(faces.iter().all(|face| face.len() == 6));
    /// ```
    pub fn faces(&self) -> Vec<Vec<Node>> {
        let mut offsets = Vec::with_capacity(self.rotations.len() + 1);
        let mut position: FxHashMap<Edge, u32> = FxHashMap::default();
        offsets.push(0usize);
        for u in self.vertices() {
            for (i, &v) in self.rotation_of(u).iter().enumerate() {
                position.insert(Edge(u, v), i as u32);
            }
            offsets.push(offsets[u as usize] + self.rotations[u as usize].len());
        }

        let num_darts = offsets[self.rotations.len()];
        let mut traced = bitvec![0; num_darts];
        let mut faces = Vec::new();

        for u in self.vertices() {
            if self.rotation_of(u).is_empty() {
                faces.push(vec![u]);
                continue;
            }

            for i in 0..self.rotations[u as usize].len() {
                if traced[offsets[u as usize] + i] {
                    continue;
                }

                let mut face = Vec::new();
                let (mut x, mut j) = (u, i);
                while !traced[offsets[x as usize] + j] {
                    traced.set(offsets[x as usize] + j, true);
                    face.push(x);

                    let y = self.rotations[x as usize][j];
                    let rotation_y = &self.rotations[y as usize];
                    let back = position[&Edge(y, x)] as usize;
                    (x, j) = (y, (back + 1) % rotation_y.len());
                }
                faces.push(face);
            }
        }

        faces
    }

    /// Number of faces (see [`Embedding::faces`])
    pub fn number_of_faces(&self) -> usize {
        self.faces().len()
    }

    /// Returns `V - E + F` for every connected component (in the order of
    /// [`Connectivity::connected_components`]). The embedding is planar iff all values are `2`.
    pub fn euler_characteristics(&self) -> Vec<i64> {
        let (component_of, num_components) = self.component_ids();
        let mut characteristics = vec![0i64; num_components as usize];

        // every node contributes `1 - deg/2`, which sums up to `V - E` per component
        let mut degree_sums = vec![0i64; num_components as usize];
        for u in self.vertices() {
            let c = component_of[u as usize] as usize;
            characteristics[c] += 1;
            degree_sums[c] += self.degree_of(u) as i64;
        }
        for (chi, deg) in characteristics.iter_mut().zip(degree_sums) {
            *chi -= deg / 2;
        }

        for face in self.faces() {
            characteristics[component_of[face[0] as usize] as usize] += 1;
        }

        characteristics
    }

    /// Returns *true* if every connected component satisfies Euler's formula `V - E + F = 2`
    pub fn is_planar_embedding(&self) -> bool {
        self.euler_characteristics().into_iter().all(|x| x == 2)
    }
}

impl GraphType for Embedding {
    type Dir = Undirected;
}

impl GraphNodeOrder for Embedding {
    fn number_of_nodes(&self) -> NumNodes {
        self.rotations.len() as NumNodes
    }
}

impl GraphEdgeOrder for Embedding {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for Embedding {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.rotation_of(u).iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.rotation_of(u).len() as NumNodes
    }
}

impl AdjacencyTest for Embedding {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.contains_edge(u, v)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    /// K4 drawn as triangle (1, 2, 3) around center 0, rotations counter-clockwise
    fn k4() -> Embedding {
        Embedding::from_rotations(vec![vec![1, 2, 3], vec![2, 0, 3], vec![3, 0, 1], vec![1, 0, 2]])
    }

    #[test]
    fn planar_k4() {
        let embedding = k4();
        assert_eq!(embedding.number_of_nodes(), 4);
        assert_eq!(embedding.number_of_edges(), 6);
        assert!(embedding.contains_edge(2, 3));
        assert_eq!(
            embedding.edges_around(0).collect_vec(),
            vec![Edge(0, 1), Edge(0, 2), Edge(0, 3)]
        );

        let faces = embedding.faces();
        assert_eq!(faces.len(), 4);
        assert!(faces.iter().all(|f| f.len() == 3));
        assert_eq!(embedding.euler_characteristics(), vec![2]);
        assert!(embedding.is_planar_embedding());
    }

    #[test]
    fn non_planar_rotation() {
        let mut rotations = k4().into_rotations();
        rotations[0].swap(1, 2);
        let embedding = Embedding::from_rotations(rotations);

        assert_eq!(embedding.number_of_faces(), 2);
        assert!(!embedding.is_planar_embedding());
    }

    #[test]
    fn trees_and_isolated_nodes() {
        // star around 0, isolated node 4
        let embedding = Embedding::from_rotations(vec![vec![1, 2, 3], vec![0], vec![0], vec![0], vec![]]);

        let faces = embedding.faces();
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].len(), 6);
        assert_eq!(faces[1], vec![4]);
        assert_eq!(embedding.euler_characteristics(), vec![2, 2]);
        assert_eq!(embedding.connected_components().count(), 2);
    }

    #[test]
    #[should_panic]
    fn asymmetric_rotations() {
        Embedding::from_rotations(vec![vec![1], vec![]]);
    }
}
