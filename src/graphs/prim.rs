use std::hash::Hash;

use bit_vec::BitVec;

use crate::graphs::adjacency::AdjacencyList;
use crate::graphs::frontier::MinFrontier;
use crate::graphs::graph::WeightedGraph;
use crate::graphs::visited::Visited;
use crate::graphs::weighted::{Weight, Weighted};

/// Minimum-spanning-tree engine growing a tree outward from its seeds.
///
/// The engine is an iterator: every `next` call commits one tree edge
/// and yields it as `(origin, destination, weight)`, where `origin` was
/// already attached and `destination` is the vertex the edge attaches.
/// On a disconnected graph the engine exhausts after spanning the
/// seed's component, a normal terminal state, not a failure.
pub struct GraphPrim<'g, G: Weighted, S: Visited<usize>> {
    graph: &'g G,
    visited: S,
    frontier: MinFrontier<(usize, usize)>,
}

impl<'g, G: Weighted, S: Visited<usize>> GraphPrim<'g, G, S> {
    /// Seeds the engine with starting vertices.
    ///
    /// Seeds out of range are skipped, so an unknown start degrades to an
    /// engine that commits nothing. Seeding several vertices grows a
    /// spanning forest with one tree per seed component.
    pub fn new(graph: &'g G, starts: impl IntoIterator<Item = usize>) -> Self {
        let vertex_count = graph.vertex_count();
        let mut visited = S::default();
        let mut frontier = MinFrontier::new();

        for start in starts {
            if start < vertex_count && visited.visit(start) {
                for (weight, neighbor) in graph.neighbors(start) {
                    if !visited.is_visited(&neighbor) {
                        frontier.push(weight, (start, neighbor));
                    }
                }
            }
        }

        Self {
            graph,
            visited,
            frontier,
        }
    }

    /// The set of vertices attached so far.
    #[inline]
    pub fn into_visited(self) -> S {
        self.visited
    }
}

impl<'g, G: Weighted, S: Visited<usize>> Iterator for GraphPrim<'g, G, S> {
    type Item = (usize, usize, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((weight, (origin, candidate))) = self.frontier.pop() {
            if !self.visited.visit(candidate) {
                continue; // stale: attached through a cheaper edge already
            }

            for (next_weight, neighbor) in self.graph.neighbors(candidate) {
                if !self.visited.is_visited(&neighbor) {
                    self.frontier.push(next_weight, (candidate, neighbor));
                }
            }

            return Some((origin, candidate, weight));
        }

        None
    }
}

/// Result of a minimum-spanning-tree query.
///
/// Edges appear in selection order. When the graph is disconnected the
/// tree covers only the start's component; [`SpanningTree::spanned`]
/// against the graph's vertex count detects that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<V> {
    edges: Vec<(V, V, Weight)>,
    total_weight: Weight,
    spanned: usize,
}

impl<V> SpanningTree<V> {
    /// Selected edges as `(origin, destination, weight)`, in the order
    /// they were committed.
    pub fn edges(&self) -> &[(V, V, Weight)] {
        &self.edges
    }

    /// Sum of the selected edge weights.
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Number of selected edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of vertices attached to the tree, the start included.
    /// Zero when the start was not a vertex of the graph.
    pub fn spanned(&self) -> usize {
        self.spanned
    }

    /// Returns true when the tree spans every vertex of `graph`.
    ///
    /// Vacuously true for the empty graph.
    pub fn is_spanning(&self, graph: &WeightedGraph<V>) -> bool {
        self.spanned == graph.vertex_count()
    }
}

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Computes a minimum spanning tree rooted at `start`.
    ///
    /// If the graph is disconnected the result spans only `start`'s
    /// component; an unknown `start` or an empty graph yields the empty
    /// tree at zero cost. Both are normal results, not errors.
    pub fn minimum_spanning_tree(&self, start: &V) -> SpanningTree<V> {
        let start_index = self.index_of(start);
        let mut engine: GraphPrim<AdjacencyList, BitVec> =
            GraphPrim::new(self.adjacency(), start_index);

        let mut edges = Vec::new();
        let mut total_weight: Weight = 0;
        for (origin, destination, weight) in engine.by_ref() {
            edges.push((
                self.label(origin).clone(),
                self.label(destination).clone(),
                weight,
            ));
            total_weight = total_weight.saturating_add(weight);
        }

        // every committed edge attaches exactly one new vertex
        let spanned = match start_index {
            Some(_) => edges.len() + 1,
            None => 0,
        };
        debug_assert_eq!(
            spanned,
            {
                let visited = engine.into_visited();
                self.adjacency()
                    .vertices()
                    .filter(|vertex| visited.is_visited(vertex))
                    .count()
            },
            "attached count must match the visited set"
        );

        SpanningTree {
            edges,
            total_weight,
            spanned,
        }
    }
}
