/// Accumulated cost type used for edge weights and distances.
///
/// Weights are validated to be non-negative at graph construction, so an
/// unsigned type is sufficient everywhere past the build step. Distances
/// accumulate with saturating addition, which keeps [`Weight::MAX`] usable
/// as the "unreached" sentinel even for adversarial inputs.
pub type Weight = u64;

/// Sentinel distance for vertices no path has reached yet.
pub(crate) const UNREACHED: Weight = Weight::MAX;

/// Core abstraction for finite weighted undirected graphs.
///
/// Vertices are identified by dense indices from zero up to
/// `vertex_count - 1`. Each incidence is a pair `(weight, neighbor)`;
/// because the graph is undirected, an edge between `u` and `v` appears in
/// the incidence lists of both endpoints with the same weight. A loop edge
/// appears twice in the list of its single endpoint and therefore
/// contributes 2 to the degree, in accordance with standard
/// graph-theoretic conventions.
///
/// The trait focuses on structural access to vertices and incidences.
/// Algorithms such as shortest path or spanning tree computation are
/// written as engines generic over this interface.
///
/// Iteration uses associated iterator types, so implementations can avoid
/// extra allocation and avoid dynamic dispatch.
pub trait Weighted {
    /// Iterator over the incidences of one vertex.
    ///
    /// Each item is a pair `(weight, neighbor)`. The order of incidences
    /// depends on the implementation, but must be stable for a given graph
    /// instance.
    type Neighbors<'a>: Iterator<Item = (Weight, usize)>
    where
        Self: 'a;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of undirected edges.
    ///
    /// Parallel edges are counted individually. A loop edge counts once
    /// even though it appears twice in its endpoint's incidence list.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the incidences of the given vertex.
    ///
    /// A vertex out of range has no incidences.
    fn neighbors(&self, vertex: usize) -> Self::Neighbors<'_>;

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> std::ops::Range<usize> {
        0..self.vertex_count()
    }

    /// Returns the degree of the given vertex.
    ///
    /// Loop edges contribute 2, because both of their incidence entries
    /// live in the same list.
    fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).count()
    }

    /// Returns true when there exists at least one edge between `a` and `b`.
    ///
    /// This checks for a single-step edge only,
    /// it does not perform a reachability query through longer paths.
    fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).any(|(_, neighbor)| neighbor == b)
    }

    /// Size measure for the whole graph.
    ///
    /// Implementations usually define this as the sum of the number of
    /// vertices and the number of edges but other consistent measures
    /// are also allowed.
    fn size(&self) -> usize {
        self.vertex_count() + self.edge_count()
    }

    /// Returns true when the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// Returns an iterator over the weights of all edges between `a` and `b`.
///
/// Parallel edges yield one weight each. It is a generic helper for any
/// type that implements [`Weighted`].
pub fn connecting<G>(graph: &G, a: usize, b: usize) -> impl Iterator<Item = Weight> + '_
where
    G: Weighted,
{
    graph
        .neighbors(a)
        .filter(move |&(_, neighbor)| neighbor == b)
        .map(|(weight, _)| weight)
}
