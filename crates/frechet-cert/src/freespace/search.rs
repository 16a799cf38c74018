//! Breadth-first witness search over a span graph.

use std::collections::VecDeque;

use super::types::{NodeId, SpanGraph};

/// BFS from the source set until a sink is dequeued. Returns the witness
/// path in travel order, or `None` when the frontier empties first.
///
/// Discovery order does not matter for correctness; the BFS tree yields a
/// hop-minimal witness, not a geometrically shortest one. Every node is
/// visited at most once, so cycles in the graph are harmless.
pub fn bfs_witness(g: &SpanGraph) -> Option<Vec<NodeId>> {
    let mut visited = vec![false; g.len()];
    let mut parent: Vec<Option<NodeId>> = vec![None; g.len()];
    let mut queue = VecDeque::new();
    for &s in &g.sources {
        if !visited[s.0] {
            visited[s.0] = true;
            queue.push_back(s);
        }
    }
    while let Some(cur) = queue.pop_front() {
        if g.sinks[cur.0] {
            let mut path = vec![cur];
            let mut up = parent[cur.0];
            while let Some(x) = up {
                path.push(x);
                up = parent[x.0];
            }
            path.reverse();
            return Some(path);
        }
        for &next in &g.adj[cur.0] {
            if !visited[next.0] {
                visited[next.0] = true;
                parent[next.0] = Some(cur);
                queue.push_back(next);
            }
        }
    }
    None
}
