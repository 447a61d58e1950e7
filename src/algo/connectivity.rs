use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Connected components of undirected graphs
pub trait Connectivity: AdjacencyList + GraphType<Dir = Undirected> + Sized {
    /// Returns an iterator over all connected components (including isolated nodes)
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns a vector assigning each node the index of its connected component
    /// (in the order [`Connectivity::connected_components`] emits them) and the number of components
    fn component_ids(&self) -> (Vec<NumNodes>, NumNodes) {
        let mut ids = vec![0; self.len()];
        let mut num_components = 0;
        for (id, cc) in self.connected_components().enumerate() {
            for u in cc {
                ids[u as usize] = id as NumNodes;
            }
            num_components += 1;
        }
        (ids, num_components)
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphType<Dir = Undirected> {}

/// Iterator emitting the nodes of one connected component at a time.
/// Nodes within a component appear in BFS order starting at the smallest node of the component;
/// components are ordered by their smallest node.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where
    G: AdjacencyList + GraphType<Dir = Undirected>
{
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn components() {
        let graph = AdjArrayUndir::from_edges(8, [(0, 1), (1, 2), (3, 4), (7, 6)]);

        let ccs = graph
            .connected_components()
            .map(|cc| cc.into_iter().sorted().collect_vec())
            .collect_vec();
        assert_eq!(ccs, vec![vec![0, 1, 2], vec![3, 4], vec![5], vec![6, 7]]);
    }

    #[test]
    fn singleton_start() {
        let graph = AdjArrayUndir::from_edges(4, [(2, 3)]);
        assert_eq!(graph.connected_components().count(), 3);

        let (ids, num) = graph.component_ids();
        assert_eq!(num, 3);
        assert_eq!(ids, vec![0, 1, 2, 2]);
    }

    #[test]
    fn empty_graph() {
        let graph = AdjArrayUndir::new(0);
        assert_eq!(graph.connected_components().count(), 0);

        let graph = AdjArrayUndir::new(3);
        assert_eq!(graph.connected_components().count(), 3);
        assert_eq!(graph.component_ids(), (vec![0, 1, 2], 3));
    }
}
