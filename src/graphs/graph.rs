use std::hash::Hash;

use crate::error::BuildError;
use crate::graphs::adjacency::AdjacencyList;
use crate::graphs::labels::VertexLabels;
use crate::graphs::weighted::{Weight, Weighted};

/// A weighted undirected graph over caller-supplied vertex labels.
///
/// The graph composes two components: a label pool assigning each label a
/// dense index by first appearance, and an [`AdjacencyList`] holding the
/// mirrored incidence lists over those indices. Both are built once from
/// a finite edge list and never mutated afterwards, so any number of
/// queries can share the graph concurrently.
///
/// Labels only need equality, hashing, and cloning. No ordering is
/// required of them; every deterministic choice the engines make is
/// derived from edge insertion order.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph<V> {
    labels: VertexLabels<V>,
    adjacency: AdjacencyList,
}

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Builds a graph from `(u, v, weight)` triples.
    ///
    /// Each triple inserts an undirected edge: `v` becomes reachable from
    /// `u` and `u` from `v`, at the same weight. Parallel edges are both
    /// retained, self-loops are accepted and stored, and every endpoint
    /// becomes a vertex even when all of its edges are loops elsewhere.
    ///
    /// An empty sequence yields the empty graph.
    ///
    /// # Errors
    ///
    /// [`BuildError::NegativeWeight`] when a triple carries a negative
    /// weight. Validation happens here so that the traversal engines can
    /// rely on non-negative weights as an invariant.
    pub fn from_edges<I>(edges: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (V, V, i64)>,
    {
        let mut labels = VertexLabels::new();
        let mut dense = Vec::new();

        for (index, (u, v, weight)) in edges.into_iter().enumerate() {
            if weight < 0 {
                return Err(BuildError::NegativeWeight { index, weight });
            }

            let u = labels.intern(u);
            let v = labels.intern(v);
            dense.push((u, v, weight as Weight));
        }

        let adjacency = AdjacencyList::from_edges(labels.len(), &dense);

        Ok(Self { labels, adjacency })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges, parallel edges counted individually.
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Returns true when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns true when `label` is a vertex of this graph.
    pub fn contains(&self, label: &V) -> bool {
        self.labels.index_of(label).is_some()
    }

    /// Iterator over all vertex labels, in first-appearance order.
    pub fn vertices(&self) -> std::slice::Iter<'_, V> {
        self.labels.iter()
    }

    /// Iterator over the `(weight, neighbor)` incidences of `label`.
    ///
    /// Unknown labels have no incidences.
    pub fn neighbors<'a>(&'a self, label: &V) -> impl Iterator<Item = (Weight, &'a V)> + 'a {
        self.labels
            .index_of(label)
            .into_iter()
            .flat_map(|vertex| self.adjacency.neighbors(vertex))
            .map(|(weight, neighbor)| (weight, self.labels.label(neighbor)))
    }

    /// Degree of `label`; loop edges contribute 2. Unknown labels have
    /// degree zero.
    pub fn degree(&self, label: &V) -> usize {
        self.labels
            .index_of(label)
            .map_or(0, |vertex| self.adjacency.degree(vertex))
    }

    /// Dense index of `label`, if it is a vertex of this graph.
    pub(crate) fn index_of(&self, label: &V) -> Option<usize> {
        self.labels.index_of(label)
    }

    /// Label behind a dense index.
    pub(crate) fn label(&self, vertex: usize) -> &V {
        self.labels.label(vertex)
    }

    /// The dense adjacency component the engines run on.
    pub(crate) fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }
}
