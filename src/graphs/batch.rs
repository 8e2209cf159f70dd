use std::hash::Hash;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::graphs::dijkstra::ShortestPaths;
use crate::graphs::graph::WeightedGraph;

// Full shortest-path trees are expensive compared to the per-item cost
// rayon amortizes, so the switch point is low.
const PARALLEL_THRESHOLD: usize = 8;

/// Computes one full shortest-path tree per requested source.
///
/// Every query runs against the same immutable graph with its own
/// tables, so the queries are independent; batches of at least eight
/// sources fan out across threads, smaller ones run sequentially. The
/// results are positionally aligned with `sources` and identical in
/// either mode.
pub fn shortest_path_trees<'g, V>(
    graph: &'g WeightedGraph<V>,
    sources: &[V],
) -> Vec<ShortestPaths<'g, V>>
where
    V: Eq + Hash + Clone + Sync,
{
    if sources.len() < PARALLEL_THRESHOLD {
        sources
            .iter()
            .map(|source| graph.shortest_paths(source))
            .collect()
    } else {
        sources
            .par_iter()
            .map(|source| graph.shortest_paths(source))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batched_tables_match_individual_queries() {
        let g = WeightedGraph::from_edges([
            ("a", "b", 1),
            ("b", "c", 2),
            ("c", "d", 3),
            ("a", "d", 10),
        ])
        .unwrap();

        let sources = ["a", "c", "ghost"];
        let batched = shortest_path_trees(&g, &sources);
        assert_eq!(batched.len(), sources.len());

        for (source, table) in sources.iter().zip(&batched) {
            let individual = g.shortest_paths(source);
            for vertex in g.vertices() {
                assert_eq!(
                    table.distance(vertex),
                    individual.distance(vertex),
                    "source {source} vertex {vertex}"
                );
            }
        }
    }

    #[test]
    fn parallel_and_sequential_batches_agree() {
        // a ring with a chord; twelve sources forces the parallel branch
        let g = WeightedGraph::from_edges([
            (0_u32, 1, 4),
            (1, 2, 1),
            (2, 3, 7),
            (3, 4, 2),
            (4, 5, 3),
            (5, 0, 5),
            (1, 4, 1),
        ])
        .unwrap();

        let many: Vec<u32> = (0..12).map(|i| i % 6).collect();
        assert!(many.len() >= PARALLEL_THRESHOLD);

        let batched = shortest_path_trees(&g, &many);
        for (source, table) in many.iter().zip(&batched) {
            let individual = g.shortest_paths(source);
            for vertex in g.vertices() {
                assert_eq!(table.distance(vertex), individual.distance(vertex));
            }
        }
    }

    #[test]
    fn empty_batch_is_empty() {
        let g = WeightedGraph::from_edges([("a", "b", 1)]).unwrap();
        let batched = shortest_path_trees::<&str>(&g, &[]);
        assert!(batched.is_empty());
    }
}
