/*!
# Biconnectivity Augmentation

Adds auxiliary edges to a connected [`WorkingGraph`] until it is biconnected.

During a DFS, a tree child `w` of `v` whose subtree cannot reach above `v`
(`low[w] >= dfs[v]`) is separated from the rest of the graph by `v`. We then connect
- `w` to the parent of `v` if `w` is the first child of `v`, or
- `w` to the first child of `v` otherwise.

Every added edge joins two nodes sharing a face around the cut vertex `v`, so a planar graph
stays planar. Neither kind of pair can already be adjacent: the first would contradict
`low[w] >= dfs[v]` and the second would be a cross edge.
*/

use super::component::*;
use crate::*;

struct StackFrame {
    node: Node,
    parent_edge: Option<EdgeId>,
    next_edge: usize,
}

/// Makes `graph` biconnected and returns the number of auxiliary edges added
pub(super) fn make_biconnected(graph: &mut WorkingGraph) -> NumEdges {
    let n = graph.number_of_nodes() as usize;
    if n < 3 {
        return 0;
    }

    let mut dfs = vec![INVALID_NODE; n];
    let mut low = vec![INVALID_NODE; n];
    let mut parent = vec![INVALID_NODE; n];
    let mut first_child = vec![INVALID_NODE; n];
    let mut next_num: Node = 0;

    let mut auxiliary = Vec::new();

    dfs[0] = next_num;
    low[0] = next_num;
    next_num += 1;
    let mut call_stack = vec![StackFrame {
        node: 0,
        parent_edge: None,
        next_edge: 0,
    }];

    while let Some(frame) = call_stack.last_mut() {
        let v = frame.node;

        let Some(&e) = graph.incident_edges(v).get(frame.next_edge) else {
            call_stack.pop();

            let w = v;
            let v = parent[w as usize];
            if v == INVALID_NODE {
                continue;
            }

            low[v as usize] = low[v as usize].min(low[w as usize]);
            if low[w as usize] >= dfs[v as usize] {
                let first = first_child[v as usize];
                if first == w {
                    let grand_parent = parent[v as usize];
                    if grand_parent != INVALID_NODE {
                        auxiliary.push((w, grand_parent));
                    }
                } else {
                    auxiliary.push((first, w));
                }
            }
            continue;
        };
        frame.next_edge += 1;

        if frame.parent_edge == Some(e) {
            continue;
        }

        let w = graph.opposite(e, v);
        if dfs[w as usize] == INVALID_NODE {
            parent[w as usize] = v;
            if first_child[v as usize] == INVALID_NODE {
                first_child[v as usize] = w;
            }
            dfs[w as usize] = next_num;
            low[w as usize] = next_num;
            next_num += 1;

            call_stack.push(StackFrame {
                node: w,
                parent_edge: Some(e),
                next_edge: 0,
            });
        } else {
            low[v as usize] = low[v as usize].min(dfs[w as usize]);
        }
    }

    for &(u, v) in &auxiliary {
        graph.add_edge(u, v, EdgeKind::Auxiliary);
    }

    auxiliary.len() as NumEdges
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;
    use crate::prelude::*;

    fn working_graph(n: NumNodes, edges: &[(Node, Node)]) -> WorkingGraph {
        let graph = AdjArrayUndir::from_edges(n, edges.iter().copied());
        let nodes = (0..n).collect_vec();
        let mut local_id = vec![INVALID_NODE; n as usize];
        WorkingGraph::from_component(&graph, &nodes, &mut local_id)
    }

    /// Naive check: removing any single node leaves the rest connected
    fn is_biconnected(graph: &WorkingGraph) -> bool {
        let n = graph.number_of_nodes();
        (0..n).all(|removed| {
            let start = if removed == 0 { 1 } else { 0 };
            let mut visited = NodeBitSet::new(n);
            visited.set_bit(removed);
            visited.set_bit(start);
            let mut stack = vec![start];
            while let Some(u) = stack.pop() {
                for &e in graph.incident_edges(u) {
                    let v = graph.opposite(e, u);
                    if !visited.set_bit(v) {
                        stack.push(v);
                    }
                }
            }
            visited.are_all_set()
        })
    }

    #[test]
    fn biconnected_input_is_untouched() {
        let mut graph = working_graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(make_biconnected(&mut graph), 0);
        assert_eq!(graph.number_of_auxiliary_edges(), 0);
    }

    #[test]
    fn path_and_star() {
        let mut path = working_graph(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert!(make_biconnected(&mut path) > 0);
        assert!(is_biconnected(&path));

        let mut star = working_graph(6, &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
        assert_eq!(make_biconnected(&mut star), 4);
        assert!(is_biconnected(&star));
    }

    #[test]
    fn no_duplicate_edges() {
        // two triangles sharing node 2, plus a pendant path
        let mut graph = working_graph(
            7,
            &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2), (4, 5), (5, 6)],
        );
        make_biconnected(&mut graph);
        assert!(is_biconnected(&graph));

        let edges = (0..graph.number_of_edges())
            .map(|e| {
                let (u, v) = graph.endpoints(e);
                Edge(u, v).normalized()
            })
            .collect_vec();
        assert_eq!(edges.iter().unique().count(), edges.len());
    }

    #[test]
    fn tiny_graphs() {
        let mut single = working_graph(1, &[]);
        assert_eq!(make_biconnected(&mut single), 0);

        let mut edge = working_graph(2, &[(0, 1)]);
        assert_eq!(make_biconnected(&mut edge), 0);
    }
}
