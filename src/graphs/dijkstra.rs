use std::hash::Hash;

use crate::graphs::frontier::MinFrontier;
use crate::graphs::graph::WeightedGraph;
use crate::graphs::weighted::{Weight, Weighted, UNREACHED};

/// Single-source shortest-path engine over non-negative edge weights.
///
/// The engine is an iterator: every `next` call settles one vertex and
/// yields `(vertex, distance)`, in nondecreasing distance order, each
/// reachable vertex exactly once. Driving it to exhaustion computes the
/// full shortest-path tree; stopping once a target vertex settles is the
/// supported early exit, since a settled distance is final.
pub struct GraphDijkstra<'g, G: Weighted> {
    graph: &'g G,
    distances: Vec<Weight>,
    predecessors: Vec<Option<usize>>,
    frontier: MinFrontier<usize>,
}

impl<'g, G: Weighted> GraphDijkstra<'g, G> {
    /// Seeds the engine with zero-distance sources.
    ///
    /// Sources out of range are skipped, so an unknown source degrades to
    /// an engine that settles nothing. Duplicate sources are seeded once.
    pub fn new(graph: &'g G, sources: impl IntoIterator<Item = usize>) -> Self {
        let vertex_count = graph.vertex_count();
        let mut distances = vec![UNREACHED; vertex_count];
        let mut frontier = MinFrontier::new();

        for source in sources {
            if source < vertex_count && distances[source] != 0 {
                distances[source] = 0;
                frontier.push(0, source);
            }
        }

        Self {
            graph,
            distances,
            predecessors: vec![None; vertex_count],
            frontier,
        }
    }

    /// Drives the engine to exhaustion and returns the distance and
    /// predecessor tables, [`UNREACHED`]/`None` for untouched vertices.
    pub(crate) fn into_tables(mut self) -> (Vec<Weight>, Vec<Option<usize>>) {
        while self.next().is_some() {}
        (self.distances, self.predecessors)
    }
}

impl<'g, G: Weighted> Iterator for GraphDijkstra<'g, G> {
    type Item = (usize, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((cost, vertex)) = self.frontier.pop() {
            if cost > self.distances[vertex] {
                continue; // stale: a cheaper path was settled earlier
            }

            for (weight, neighbor) in self.graph.neighbors(vertex) {
                let candidate = cost.saturating_add(weight);
                if candidate < self.distances[neighbor] {
                    self.distances[neighbor] = candidate;
                    self.predecessors[neighbor] = Some(vertex);
                    self.frontier.push(candidate, neighbor);
                }
            }

            // relaxing cannot improve the vertex being settled
            debug_assert_eq!(self.distances[vertex], cost);

            return Some((vertex, cost));
        }

        None
    }
}

/// A reconstructed shortest path, endpoints included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    vertices: Vec<V>,
    weight: Weight,
}

impl<V> Route<V> {
    /// Path vertices from source to target, inclusive. A route from a
    /// vertex to itself holds that single vertex.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Accumulated weight along the path.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Number of edges on the path.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

/// Distance and predecessor tables of one full shortest-path query.
///
/// Produced by [`WeightedGraph::shortest_paths`]. Borrowing the graph
/// keeps label resolution available without copying the label pool.
pub struct ShortestPaths<'g, V> {
    graph: &'g WeightedGraph<V>,
    distances: Vec<Weight>,
    predecessors: Vec<Option<usize>>,
}

impl<'g, V> ShortestPaths<'g, V>
where
    V: Eq + Hash + Clone,
{
    /// Shortest distance from the source to `vertex`, `None` when no path
    /// reaches it (or the label is unknown).
    pub fn distance(&self, vertex: &V) -> Option<Weight> {
        let index = self.graph.index_of(vertex)?;
        match self.distances[index] {
            UNREACHED => None,
            distance => Some(distance),
        }
    }

    /// The vertex immediately preceding `vertex` on its shortest path.
    ///
    /// `None` for the source itself, unreached vertices, and unknown
    /// labels.
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        let index = self.graph.index_of(vertex)?;
        self.predecessors[index].map(|previous| self.graph.label(previous))
    }

    /// Reconstructs the path from the source to `target` by back-walking
    /// predecessors. `None` when no path exists; never a truncated path.
    pub fn route_to(&self, target: &V) -> Option<Route<V>> {
        let target_index = self.graph.index_of(target)?;
        if self.distances[target_index] == UNREACHED {
            return None;
        }

        let mut indices = vec![target_index];
        let mut current = target_index;
        while let Some(previous) = self.predecessors[current] {
            current = previous;
            indices.push(current);
        }
        indices.reverse();

        // the back-walk of a reached vertex ends at the source
        debug_assert_eq!(self.distances[current], 0);

        Some(Route {
            vertices: indices
                .into_iter()
                .map(|index| self.graph.label(index).clone())
                .collect(),
            weight: self.distances[target_index],
        })
    }

    /// Number of vertices the source reaches, itself included.
    pub fn reached_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|&&distance| distance != UNREACHED)
            .count()
    }
}

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Computes shortest distances and predecessors from `source` to
    /// every reachable vertex.
    ///
    /// An unknown `source` yields a table in which nothing is reached;
    /// that is the normal answer for a vertex outside the graph, not an
    /// error.
    pub fn shortest_paths(&self, source: &V) -> ShortestPaths<'_, V> {
        let engine = GraphDijkstra::new(self.adjacency(), self.index_of(source));
        let (distances, predecessors) = engine.into_tables();

        ShortestPaths {
            graph: self,
            distances,
            predecessors,
        }
    }

    /// Computes the shortest path from `source` to `target`, stopping as
    /// soon as `target` is settled.
    ///
    /// `None` means no path: the endpoints are disconnected, or one of
    /// them is not a vertex of this graph.
    pub fn shortest_path(&self, source: &V, target: &V) -> Option<Route<V>> {
        let target_index = self.index_of(target)?;
        let mut engine = GraphDijkstra::new(self.adjacency(), self.index_of(source));

        let mut settled = false;
        for (vertex, _) in engine.by_ref() {
            if vertex == target_index {
                settled = true;
                break;
            }
        }
        if !settled {
            return None;
        }

        let paths = ShortestPaths {
            graph: self,
            distances: engine.distances,
            predecessors: engine.predecessors,
        };
        paths.route_to(target)
    }
}
